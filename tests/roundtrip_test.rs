//! Integration tests for decode/encode round trips.

use bbdelta::markup::{scan, TagKind};
use bbdelta::{decode, encode, escape, normalize, unescape, Alignment, Document, InlineAttr, Run};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn reencode(doc: &Document) -> Document {
    decode(&encode(doc).unwrap())
}

#[rstest]
#[case("plain text")]
#[case("")]
#[case("a\n\nb")]
#[case("a\r\nb\rc")]
#[case("[b]bold[/b] and [i]italic[/i]")]
#[case("[b][i]x[/b]y[/i]")]
#[case("[color=#ff0000][size=12]big red[/size] red[/color] plain")]
#[case("[font=Times New Roman]serif[/font]")]
#[case("[link=http://x?a=1&amp;b=2]link[/link]")]
#[case("abc[header=1]title[/header]def")]
#[case("[center][b]Hello[/b] world[/center]\nnext")]
#[case("[b]one\ntwo[/b]")]
#[case("[center]one\ntwo[/center]")]
#[case("[header=2]A\nB[/header]")]
#[case("x[center]y")]
#[case("[right][indent=2][u]deep")]
#[case("see [img width=100 height=50]http://x/y.png[/img] here")]
#[case("[b]a[img]u[/img]b[/b]")]
#[case("[foo]hi[/foo]")]
#[case("[b]a[b]b[/b]c[/b]")]
#[case("x [img]unterminated [b]y")]
#[case("a &amp; b &lsqb;x&rsqb; it's \"quoted\"")]
#[case("&amp;amp; &#91;not a tag&#93;")]
#[case("[[b]]")]
#[case("[/b]stray close[/center]")]
#[case("[b]")]
#[case("[b]\n[/b]")]
#[case("[size=3]")]
#[case("[header=1][/header]")]
#[case("[link=u]a[b]b[/b][/link]")]
#[case("[u]x[color=red]y[/u]z[/color]")]
fn test_decode_encode_decode_is_stable(#[case] markup: &str) {
    let doc = decode(markup);
    assert_eq!(reencode(&doc), doc, "markup: {:?}", markup);
}

/// Check that every closing tag in `markup` closes the innermost open tag.
fn assert_well_nested(markup: &str) {
    for line in markup.lines() {
        let mut stack: Vec<String> = Vec::new();
        let mut rest = line;
        while let Some(tag) = scan(rest) {
            match tag.kind {
                TagKind::Open => stack.push(tag.name.clone()),
                TagKind::Close => assert_eq!(
                    stack.pop().as_deref(),
                    Some(tag.name.as_str()),
                    "badly nested: {:?}",
                    line
                ),
            }
            rest = tag.rest;
        }
        assert!(stack.is_empty(), "unclosed tags in {:?}", line);
    }
}

#[rstest]
#[case("[link=u]a[b]b[/b][/link]", "[link=u]a[b]b[/b][/link]\n")]
#[case("[color=red]x[b]y[/b][/color]z", "[color=red]x[b]y[/b][/color]z\n")]
#[case("[u]x[color=red]y[/u]z[/color]", "[u]x[color=red]y[/color][/u][color=red]z[/color]\n")]
#[case("[b][i]x[/b]y[/i]", "[b][i]x[/i][/b][i]y[/i]\n")]
fn test_encoded_tags_are_well_nested(#[case] markup: &str, #[case] expected: &str) {
    let encoded = encode(&decode(markup)).unwrap();
    assert_eq!(encoded, expected);
    assert_well_nested(&encoded);
}

#[test]
fn test_tag_only_markup_survives_round_trip() {
    for markup in ["[b]", "[b]\n[/b]", "[header=1][/header]"] {
        let doc = decode(markup);
        assert_eq!(doc.line_count(), 1);
        assert_eq!(encode(&doc).unwrap(), "\n");
        assert_eq!(reencode(&doc), doc);
    }
}

#[rstest]
#[case("[B]x[/b] [color=red]y[/color][color=red]z[/color]")]
#[case("[center][header=1]T[/header][/center]\n\nbody [img]u[/img]")]
#[case("[b]unclosed\n[i]more")]
fn test_normalize_is_a_fixed_point(#[case] markup: &str) {
    let once = normalize(markup).unwrap();
    let twice = normalize(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_unknown_tag_passthrough() {
    let doc = decode("[foo]hi[/foo]");
    assert_eq!(doc.line_count(), 1);
    assert_eq!(doc.lines[0].segments, vec![Run::text("[foo]hi[/foo]")]);
}

#[test]
fn test_boolean_toggle_round_trip() {
    let doc = decode("[b]bold[/b]");
    assert_eq!(doc.line_count(), 1);
    assert_eq!(
        doc.lines[0].segments,
        vec![Run::text("bold").with_attr(InlineAttr::Bold, true)]
    );
    assert_eq!(encode(&doc).unwrap(), "[b]bold[/b]\n");
}

#[test]
fn test_line_scoped_split() {
    let doc = decode("abc[header=1]title[/header]def");
    let texts: Vec<String> = doc.lines().map(|l| l.plain_text()).collect();
    assert_eq!(texts, vec!["abc", "title", "def"]);

    let headers: Vec<Option<u8>> = doc.lines().map(|l| l.attributes.header).collect();
    assert_eq!(headers, vec![None, Some(1), None]);
}

#[test]
fn test_minimal_toggle_emission() {
    let doc = Document::from_lines(vec![bbdelta::Line::new()
        .with_run(Run::text("one").with_attr(InlineAttr::Color, "red"))
        .with_run(Run::text("two").with_attr(InlineAttr::Color, "red"))
        .with_run(Run::text("three"))]);

    let markup = encode(&doc).unwrap();
    assert_eq!(markup.matches("[color=red]").count(), 1);
    assert_eq!(markup.matches("[/color]").count(), 1);
    assert_eq!(markup, "[color=red]onetwo[/color]three\n");
}

#[test]
fn test_image_embed_round_trip() {
    let doc = decode("[img width=100]http://x/y.png[/img]");
    assert_eq!(
        doc.lines[0].segments,
        vec![Run::image("http://x/y.png").with_attr(InlineAttr::Width, "100")]
    );
    assert_eq!(
        encode(&doc).unwrap(),
        "[img width=100]http://x/y.png[/img]\n"
    );
}

#[test]
fn test_alignment_round_trip() {
    for (tag, align) in [
        ("left", Alignment::Left),
        ("center", Alignment::Center),
        ("right", Alignment::Right),
        ("justify", Alignment::Justify),
    ] {
        let markup = format!("[{tag}]text[/{tag}]\n");
        let doc = decode(&markup);
        assert_eq!(doc.lines[0].attributes.align, Some(align));
        assert_eq!(encode(&doc).unwrap(), markup);
    }
}

#[test]
fn test_escape_unescape_inverse() {
    let samples = [
        "",
        "no reserved characters",
        "[b]tags[/b] & <html> 'single' \"double\"",
        "]][[",
        "ümlaut & 日本語 [x]",
    ];
    for s in samples {
        assert_eq!(unescape(&escape(s)), s);
    }
}
