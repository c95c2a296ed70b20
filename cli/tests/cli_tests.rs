use docsearch::{build_server, load_documents, parse_ratings, read_console, run_demo, InputDoc};
use docsearch_core::DocumentStatus;
use std::fs;
use std::io::Cursor;
use tempfile::tempdir;

#[test]
fn reads_console_format() {
    let text = "и в на\n3\n\
                белый кот и модный ошейник\n2 8 -3\n\
                пушистый кот пушистый хвост\n3 7 2 7\n\
                и на\n0\n\
                пушистый кот\n";
    let input = read_console(Cursor::new(text)).unwrap();
    assert_eq!(input.stop_words, "и в на");
    assert_eq!(input.documents.len(), 3);
    assert_eq!(input.documents[1].1, vec![7, 2, 7]);
    assert!(input.documents[2].1.is_empty());
    assert_eq!(input.query, "пушистый кот");

    let server = input.into_server();
    assert_eq!(server.document_count(), 2);
    let top = server.find_top_documents("пушистый кот");
    assert_eq!(top.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1, 0]);
}

#[test]
fn console_input_errors() {
    assert!(read_console(Cursor::new("stop\nmany\n")).is_err());
    assert!(read_console(Cursor::new("stop\n2\nonly one\n1 5\n")).is_err());
}

#[test]
fn parses_ratings_line() {
    assert_eq!(parse_ratings("4 5 -12 2 1").unwrap(), vec![5, -12, 2, 1]);
    assert_eq!(parse_ratings("").unwrap(), Vec::<i32>::new());
    assert!(parse_ratings("3 1 2").is_err());
    assert!(parse_ratings("x").is_err());
}

#[test]
fn loads_json_jsonl_and_directories() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("a.json"),
        r#"[
            {"id": 0, "text": "white cat", "ratings": [8, -3]},
            {"id": 3, "text": "groomed starling", "status": "BANNED", "ratings": [9]}
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("b.jsonl"),
        concat!(
            r#"{"id": 1, "text": "fluffy cat fluffy tail", "ratings": [7, 2, 7]}"#,
            "\n\n",
            r#"{"id": 2, "text": "groomed dog", "status": "actual"}"#,
            "\n",
        ),
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let docs = load_documents(dir.path()).unwrap();
    assert_eq!(docs.len(), 4);
    let starling = InputDoc {
        id: 3,
        text: "groomed starling".into(),
        status: DocumentStatus::Banned,
        ratings: vec![9],
    };
    assert_eq!(docs[1], starling);
    assert_eq!(docs[3].status, DocumentStatus::Actual);
    assert!(docs[3].ratings.is_empty());

    let server = build_server("", &docs);
    let top = server.find_top_documents_by_status("groomed", DocumentStatus::Banned);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].id, 3);
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(load_documents(&dir.path().join("nope.jsonl")).is_err());
}

#[test]
fn demo_prints_three_sections() {
    let mut out = Vec::new();
    run_demo(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "ACTUAL by default:");
    assert_eq!(lines[1], "{ document_id = 1, relevance = 0.866434, rating = 5 }");
    assert_eq!(lines[2], "{ document_id = 0, relevance = 0.173287, rating = 2 }");
    assert_eq!(lines[3], "{ document_id = 2, relevance = 0.173287, rating = -1 }");
    assert_eq!(lines[4], "BANNED:");
    assert_eq!(lines[5], "{ document_id = 3, relevance = 0.231049, rating = 9 }");
    assert_eq!(lines[6], "Even ids:");
    assert_eq!(lines.len(), 9);
}
