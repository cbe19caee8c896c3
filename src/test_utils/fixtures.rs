/// Documents and the exact tree each one prints
pub const TREE_SAMPLES: [(&str, &str); 6] = [
    (r#"<a x="1"><b>hi</b><c/></a>"#, "a\n\tx: 1\n\tb: hi\n\tc: \n"),
    ("<empty/>", "empty: \n"),
    ("<note>plain text</note>", "note: plain text\n"),
    (
        "<mixed>lead<child>inner</child>tail</mixed>",
        "mixed\n\tchild: inner\n",
    ),
    (
        r#"<r><p id="7" lang="en"><q>deep</q></p></r>"#,
        "r\n\tp\n\t\tid: 7\n\t\tlang: en\n\t\tq: deep\n",
    ),
    (
        "<?xml version=\"1.0\"?>\n<!-- head -->\n<doc>&lt;&amp;&gt;</doc>",
        "doc: <&>\n",
    ),
];

pub const INVALID_XML_SAMPLES: [(&str, &str); 5] = [
    ("<a>", "Unclosed root element"),
    ("<a><b></a>", "Mismatched closing tag"),
    ("", "Empty document"),
    ("<a></a><b></b>", "Two root elements"),
    ("<a x=1/>", "Unquoted attribute value"),
];
