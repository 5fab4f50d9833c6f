use crate::{
    format_leading, format_leading_aligned, format_token, render, Doc, FormatConfig, GroupId,
    Trivia,
};
use similar_asserts::assert_eq;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn config(line_width: usize) -> FormatConfig {
    FormatConfig {
        line_width,
        indent_size: 4,
    }
}

#[test]
fn consecutive_directives_stay_on_consecutive_lines() {
    init_logger();
    // Two directives with no end-of-line atom between them in the source:
    // exactly zero blank lines between the printed directive lines.
    let trivia = [
        Trivia::directive("#pragma warning disable"),
        Trivia::directive("#pragma warning restore"),
    ];
    let doc = Doc::concat(vec![format_leading(&trivia, false), Doc::text("class C { }")]);
    assert_eq!(
        render(&doc, &config(100)),
        "#pragma warning disable\n#pragma warning restore\nclass C { }"
    );
}

#[test]
fn blank_line_between_directives_survives_as_exactly_one() {
    let trivia = [
        Trivia::directive("#pragma warning disable"),
        Trivia::end_of_line(),
        Trivia::directive("#pragma warning restore"),
    ];
    let doc = Doc::concat(vec![format_leading(&trivia, false), Doc::text("class C { }")]);
    assert_eq!(
        render(&doc, &config(100)),
        "#pragma warning disable\n\n#pragma warning restore\nclass C { }"
    );
}

#[test]
fn doc_comment_never_shares_a_line_with_its_token() {
    // Wide enough for both on one line; the forced hard line wins.
    let doc = Doc::group(format_token(
        "int x;",
        &[Trivia::doc_comment("/// summary")],
        &[],
        None,
        None,
    ));
    assert_eq!(render(&doc, &config(1000)), "/// summary\nint x;");
}

#[test]
fn directives_and_disabled_text_stay_at_column_zero() {
    init_logger();
    let trivia = [
        Trivia::directive("#if DEBUG\n"),
        Trivia::disabled_text("log(1);\nlog(2);\n"),
        Trivia::directive("#endif\n"),
    ];
    let doc = Doc::concat(vec![
        Doc::text("void M()"),
        Doc::HardLine,
        Doc::text("{"),
        Doc::indent(Doc::concat(vec![
            Doc::HardLine,
            format_leading(&trivia, false),
            Doc::text("done();"),
        ])),
        Doc::HardLine,
        Doc::text("}"),
    ]);
    assert_eq!(
        render(&doc, &config(80)),
        "void M()\n{\n#if DEBUG\nlog(1);\nlog(2);\n#endif\n    done();\n}"
    );
}

#[test]
fn close_brace_trivia_aligns_with_the_body() {
    let close_trivia = [
        Trivia::line_comment("// cleanup pending"),
        Trivia::end_of_line(),
    ];
    let doc = Doc::concat(vec![
        Doc::text("{"),
        Doc::indent(Doc::concat(vec![
            Doc::HardLine,
            Doc::text("stmt;"),
            Doc::HardLine,
        ])),
        format_leading_aligned(&close_trivia),
        Doc::text("}"),
    ]);
    assert_eq!(
        render(&doc, &config(80)),
        "{\n    stmt;\n    // cleanup pending\n}"
    );
}

#[test]
fn a_flat_group_never_exceeds_the_width_budget() {
    let doc = || {
        Doc::group(Doc::concat(vec![
            Doc::text("foo("),
            Doc::indent(Doc::concat(vec![
                Doc::SoftLine,
                Doc::text("aaaa"),
                Doc::text(","),
                Doc::Line,
                Doc::text("bbbb"),
            ])),
            Doc::SoftLine,
            Doc::text(")"),
        ]))
    };
    // "foo(aaaa, bbbb)" is 15 characters wide.
    assert_eq!(render(&doc(), &config(15)), "foo(aaaa, bbbb)");
    assert_eq!(
        render(&doc(), &config(14)),
        "foo(\n    aaaa,\n    bbbb\n)"
    );
}

#[test]
fn group_id_resolution_follows_the_forced_and_flat_cases() {
    let id = GroupId(3);
    let doc = || {
        Doc::group_with_id(
            id,
            Doc::concat(vec![
                Doc::text("("),
                Doc::indent(Doc::concat(vec![
                    Doc::SoftLine,
                    Doc::text("arg"),
                    Doc::if_break_in(id, Doc::text(","), Doc::Null),
                ])),
                Doc::SoftLine,
                Doc::text(")"),
            ]),
        )
    };
    assert_eq!(render(&doc(), &config(1)), "(\n    arg,\n)");
    assert_eq!(render(&doc(), &config(1000)), "(arg)");
}

#[test]
fn already_flat_output_is_reproduced_unchanged() {
    // Re-feeding a rendered line through the same construction path keeps
    // it byte for byte.
    let doc = Doc::group(Doc::concat(vec![
        Doc::text("foo(a,"),
        Doc::Line,
        Doc::text("b)"),
    ]));
    let first = render(&doc, &config(40));
    let refed = Doc::group(Doc::text(first.clone()));
    assert_eq!(render(&refed, &config(40)), first);
}

#[test]
fn trailing_comment_rides_the_end_of_its_line() {
    let statement = format_token(
        "let x = 1;",
        &[],
        &[Trivia::whitespace(" "), Trivia::line_comment("// init")],
        None,
        None,
    );
    let doc = Doc::concat(vec![statement, Doc::HardLine, Doc::text("let y = 2;")]);
    assert_eq!(
        render(&doc, &config(80)),
        "let x = 1; // init\nlet y = 2;"
    );
}

#[test]
fn degenerate_width_still_renders_every_break_point() {
    let doc = Doc::group(Doc::concat(vec![
        Doc::text("alpha"),
        Doc::Line,
        Doc::group(Doc::concat(vec![
            Doc::text("beta"),
            Doc::Line,
            Doc::text("gamma"),
        ])),
    ]));
    assert_eq!(render(&doc, &config(0)), "alpha\nbeta\ngamma");
}
