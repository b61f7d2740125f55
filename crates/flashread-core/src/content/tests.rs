use super::*;

fn assert_ranges_partition(doc: &Document) {
    let mut expected_start = 0usize;
    for (position, paragraph) in doc.paragraphs().iter().enumerate() {
        assert_eq!(paragraph.id, position);
        assert_eq!(paragraph.word_range.start, expected_start);
        assert!(paragraph.word_range.end > paragraph.word_range.start);
        expected_start = paragraph.word_range.end;
    }
    assert_eq!(expected_start, doc.word_count());
}

#[test]
fn plain_text_is_passed_through_and_trimmed() {
    assert_eq!(
        normalize("  keep   this\tspacing \n", SourceFormat::Plain),
        Ok("keep   this\tspacing".to_owned())
    );
}

#[test]
fn blank_input_is_empty_content_for_every_format() {
    for format in [
        SourceFormat::Plain,
        SourceFormat::Markdown,
        SourceFormat::PdfExtracted,
    ] {
        assert_eq!(normalize(" \n\t \n", format), Err(LoadError::EmptyContent));
    }
}

#[test]
fn markdown_with_only_code_is_empty_content() {
    let source = "```\nlet x = 1;\n```\n\n---\n";
    assert_eq!(
        ingest(source, SourceFormat::Markdown),
        Err(LoadError::EmptyContent)
    );
}

#[test]
fn ingest_markdown_builds_paragraphs() {
    let doc = ingest(
        "# Title\n\nFirst *line* here.\n\n- second item\n",
        SourceFormat::Markdown,
    )
    .unwrap();

    let texts: Vec<_> = doc.paragraphs().iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, vec!["Title", "First line here.", "second item"]);
    assert_ranges_partition(&doc);
}

#[test]
fn ingest_pdf_merges_wrapped_lines() {
    let doc = ingest(
        "Rapid serial visual pre-\nsentation shows one\nword at a time.\n\n\nSecond block.",
        SourceFormat::PdfExtracted,
    )
    .unwrap();

    assert_eq!(doc.paragraph_count(), 2);
    assert_eq!(
        doc.paragraphs()[0].text,
        "Rapid serial visual presentation shows one word at a time."
    );
    assert_eq!(doc.words_in(&doc.paragraphs()[1]), ["Second", "block."]);
    assert_ranges_partition(&doc);
}

#[test]
fn segmentation_is_deterministic() {
    let text = "alpha beta\ngamma\n\ndelta epsilon zeta";
    assert_eq!(
        ingest(text, SourceFormat::Plain),
        ingest(text, SourceFormat::Plain)
    );
}

#[test]
fn paragraph_lookup_by_word() {
    let doc = ingest("a b\nc d e\nf", SourceFormat::Plain).unwrap();

    assert_eq!(doc.paragraph_for_word(0).map(|p| p.id), Some(0));
    assert_eq!(doc.paragraph_for_word(4).map(|p| p.id), Some(1));
    assert_eq!(doc.paragraph_for_word(5).map(|p| p.id), Some(2));
    assert_eq!(doc.paragraph_for_word(6), None);
}

#[test]
fn formats_parse_from_tags_and_extensions() {
    assert_eq!("markdown".parse(), Ok(SourceFormat::Markdown));
    assert_eq!("pdf-extracted".parse(), Ok(SourceFormat::PdfExtracted));
    assert_eq!("plain".parse(), Ok(SourceFormat::Plain));
    assert_eq!(
        "docx".parse::<SourceFormat>(),
        Err(ParseError::UnknownFormat("docx".to_owned()))
    );

    assert_eq!(
        SourceFormat::from_path(Path::new("notes/README.MD")),
        Some(SourceFormat::Markdown)
    );
    assert_eq!(
        SourceFormat::from_path(Path::new("paper.pdf")),
        Some(SourceFormat::PdfExtracted)
    );
    assert_eq!(SourceFormat::from_path(Path::new("archive.tar")), None);
}

#[test]
fn crlf_markdown_rules_never_reach_the_word_stream() {
    let doc = ingest(
        "Intro line\r\n\r\n---\r\n\r\n- - -\r\n* item\r\nEnd",
        SourceFormat::Markdown,
    )
    .unwrap();

    assert_eq!(doc.words(), ["Intro", "line", "item", "End"]);
    assert_ranges_partition(&doc);
}

#[test]
fn badge_links_read_as_their_alt_text() {
    let doc = ingest(
        "[![build](https://ci/badge.svg)](https://ci/run) Docs",
        SourceFormat::Markdown,
    )
    .unwrap();

    assert_eq!(doc.words(), ["build", "Docs"]);
}
