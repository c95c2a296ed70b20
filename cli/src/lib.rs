use anyhow::{bail, Context, Result};
use docsearch_core::{Document, DocumentId, DocumentStatus, SearchServer};
use serde::Deserialize;
use walkdir::WalkDir;

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// One document record in a JSON or JSONL input file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InputDoc {
    pub id: DocumentId,
    pub text: String,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub ratings: Vec<i32>,
}

/// Load documents from a `.json`/`.jsonl` file, or every such file under a directory.
pub fn load_documents(input: &Path) -> Result<Vec<InputDoc>> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input.is_dir() {
        for entry in WalkDir::new(input).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && matches!(extension(p), Some("json" | "jsonl")) {
                files.push(p.to_path_buf());
            }
        }
    } else if input.is_file() {
        files.push(input.to_path_buf());
    } else {
        bail!("input path {} does not exist", input.display());
    }

    let mut docs = Vec::new();
    for file in files {
        if extension(&file) == Some("jsonl") {
            read_jsonl(&file, &mut docs)?;
        } else {
            read_json(&file, &mut docs)?;
        }
    }
    tracing::info!(num_docs = docs.len(), "loaded documents");
    Ok(docs)
}

fn extension(p: &Path) -> Option<&str> {
    p.extension().and_then(|s| s.to_str())
}

fn read_jsonl(file: &Path, docs: &mut Vec<InputDoc>) -> Result<()> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    for (n, line) in BufReader::new(f).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let doc: InputDoc = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: invalid document", file.display(), n + 1))?;
        docs.push(doc);
    }
    Ok(())
}

fn read_json(file: &Path, docs: &mut Vec<InputDoc>) -> Result<()> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("{}: invalid JSON", file.display()))?;
    match json {
        serde_json::Value::Array(arr) => {
            for v in arr {
                docs.push(serde_json::from_value(v)?);
            }
        }
        serde_json::Value::Object(_) => docs.push(serde_json::from_value(json)?),
        _ => bail!("{}: expected a document object or array", file.display()),
    }
    Ok(())
}

pub fn build_server(stop_words: &str, docs: &[InputDoc]) -> SearchServer {
    let mut server = SearchServer::with_stop_words(stop_words);
    for doc in docs {
        server.add_document(doc.id, &doc.text, doc.status, &doc.ratings);
    }
    server
}

/// Input of the interactive console mode.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConsoleInput {
    pub stop_words: String,
    /// Text and ratings; ids are assigned by position.
    pub documents: Vec<(String, Vec<i32>)>,
    pub query: String,
}

/// Read stop words, a document count, then a text line and a ratings line
/// (`count r1 .. rk`) per document, then the query.
pub fn read_console<R: BufRead>(reader: R) -> Result<ConsoleInput> {
    let mut lines = reader.lines().enumerate();
    let mut next_line = |what: &str| -> Result<(usize, String)> {
        match lines.next() {
            Some((n, line)) => Ok((n + 1, line?)),
            None => bail!("unexpected end of input, expected {what}"),
        }
    };

    let (_, stop_words) = next_line("stop words")?;
    let (n, count) = next_line("document count")?;
    let count: usize = count
        .trim()
        .parse()
        .with_context(|| format!("line {n}: invalid document count {count:?}"))?;

    let mut documents = Vec::with_capacity(count);
    for _ in 0..count {
        let (_, text) = next_line("document text")?;
        let (n, ratings) = next_line("document ratings")?;
        let ratings =
            parse_ratings(&ratings).with_context(|| format!("line {n}: invalid ratings"))?;
        documents.push((text, ratings));
    }
    let query = next_line("query").map(|(_, q)| q).unwrap_or_default();
    Ok(ConsoleInput { stop_words, documents, query })
}

/// Parse `count r1 .. rk`. A blank line means no ratings.
pub fn parse_ratings(line: &str) -> Result<Vec<i32>> {
    let mut values = line.split_whitespace().map(str::parse::<i32>);
    let count = match values.next() {
        Some(count) => count?,
        None => return Ok(Vec::new()),
    };
    if count < 0 {
        bail!("negative rating count {count}");
    }
    let ratings = values.take(count as usize).collect::<Result<Vec<_>, _>>()?;
    if ratings.len() != count as usize {
        bail!("expected {count} ratings, found {}", ratings.len());
    }
    Ok(ratings)
}

impl ConsoleInput {
    pub fn into_server(self) -> SearchServer {
        let mut server = SearchServer::with_stop_words(&self.stop_words);
        for (id, (text, ratings)) in self.documents.iter().enumerate() {
            server.add_document(id as DocumentId, text, DocumentStatus::Actual, ratings);
        }
        server
    }
}

pub fn print_documents<W: Write>(out: &mut W, docs: &[Document], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, docs)?;
        writeln!(out)?;
    } else {
        for doc in docs {
            writeln!(out, "{doc}")?;
        }
    }
    Ok(())
}

/// The three canned queries over the sample collection.
pub fn run_demo<W: Write>(out: &mut W) -> Result<()> {
    let mut server = SearchServer::with_stop_words("и в на");
    let collection: [(&str, DocumentStatus, &[i32]); 4] = [
        ("белый кот и модный ошейник", DocumentStatus::Actual, &[8, -3]),
        ("пушистый кот пушистый хвост", DocumentStatus::Actual, &[7, 2, 7]),
        ("ухоженный пёс выразительные глаза", DocumentStatus::Actual, &[5, -12, 2, 1]),
        ("ухоженный скворец евгений", DocumentStatus::Banned, &[9]),
    ];
    for (id, (text, status, ratings)) in collection.into_iter().enumerate() {
        server.add_document(id as DocumentId, text, status, ratings);
    }

    let query = "пушистый ухоженный кот";
    writeln!(out, "ACTUAL by default:")?;
    print_documents(out, &server.find_top_documents(query), false)?;
    writeln!(out, "BANNED:")?;
    let banned = server.find_top_documents_by_status(query, DocumentStatus::Banned);
    print_documents(out, &banned, false)?;
    writeln!(out, "Even ids:")?;
    let even = server.find_top_documents_with(query, |id, _, _| id % 2 == 0);
    print_documents(out, &even, false)?;
    Ok(())
}
