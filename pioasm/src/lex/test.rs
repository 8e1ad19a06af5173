use expect_test::{expect, Expect};

use super::Lexer;

fn check(src: &str, expect: Expect) {
    let tokens = Lexer::new(src)
        .map(|t| match t {
            Ok(token) => format!("{token:?}"),
            Err(err) => format!("error: {err:?}"),
        })
        .collect::<Vec<_>>()
        .join("\n");
    expect.assert_eq(&tokens);
}

fn positions(src: &str, offsets: &[u32], expect: Expect) {
    let mut lexer = Lexer::new(src);
    lexer.by_ref().for_each(drop);
    let positions = offsets
        .iter()
        .map(|&offset| format!("{offset} => {:?}", lexer.position(offset)))
        .collect::<Vec<_>>()
        .join("\n");
    expect.assert_eq(&positions);
}

#[test]
fn empty() {
    check("", expect![[r#"Eof (0, 0) """#]]);
}
#[test]
fn comments_only() {
    check(
        "; comment\n// comment\n;comment\n//comment",
        expect![[r#"Eof (39, 39) """#]],
    );
}
#[test]
fn blank_lines_collapse() {
    check("\n\n\n; comment\n\n\n", expect![[r#"Eof (15, 15) """#]]);
    check(
        "A\n\n\nB",
        expect![[r#"
            Symbol (0, 1) "A"
            Eol (1, 2) "\n"
            Symbol (4, 5) "B"
            Eof (5, 5) """#]],
    );
}
#[test]
fn defines_with_comments() {
    check(
        ".define A 1 ;\n.define B 2;;;;;;\n",
        expect![[r#"
            Directive(Define) (0, 7) ".define"
            Symbol (8, 9) "A"
            Number (10, 11) "1"
            Eol (13, 14) "\n"
            Directive(Define) (14, 21) ".define"
            Symbol (22, 23) "B"
            Number (24, 25) "2"
            Eol (31, 32) "\n"
            Eof (32, 32) """#]],
    );
}
#[test]
fn instructions() {
    check(
        "JMP\nwait\nIn\nout push Pull\nmov irq SET nop",
        expect![[r#"
            Instruction(Jmp) (0, 3) "JMP"
            Eol (3, 4) "\n"
            Instruction(Wait) (4, 8) "wait"
            Eol (8, 9) "\n"
            Instruction(In) (9, 11) "In"
            Eol (11, 12) "\n"
            Instruction(Out) (12, 15) "out"
            Instruction(Push) (16, 20) "push"
            Instruction(Pull) (21, 25) "Pull"
            Eol (25, 26) "\n"
            Instruction(Mov) (26, 29) "mov"
            Instruction(Irq) (30, 33) "irq"
            Instruction(Set) (34, 37) "SET"
            Instruction(Nop) (38, 41) "nop"
            Eof (41, 41) """#]],
    );
}
#[test]
fn keywords_need_word_end() {
    check(
        "input in, set_x",
        expect![[r#"
            Symbol (0, 5) "input"
            Symbol (6, 8) "in"
            Comma (8, 9) ","
            Symbol (10, 15) "set_x"
            Eof (15, 15) """#]],
    );
}
#[test]
fn qualifiers() {
    check(
        "public OPT optional side sideset side_set pin gpio osre",
        expect![[r#"
            Qualifier(Public) (0, 6) "public"
            Qualifier(Optional) (7, 10) "OPT"
            Qualifier(Optional) (11, 19) "optional"
            Qualifier(Side) (20, 24) "side"
            Qualifier(Side) (25, 32) "sideset"
            Qualifier(Side) (33, 41) "side_set"
            Qualifier(Pin) (42, 45) "pin"
            Qualifier(Gpio) (46, 50) "gpio"
            Qualifier(Osre) (51, 55) "osre"
            Eof (55, 55) """#]],
    );
}
#[test]
fn punctuation() {
    check(
        "[ ] ( ) , + - * / & | ^ ! =",
        expect![[r#"
            OpenBracket (0, 1) "["
            CloseBracket (2, 3) "]"
            OpenParen (4, 5) "("
            CloseParen (6, 7) ")"
            Comma (8, 9) ","
            Plus (10, 11) "+"
            Minus (12, 13) "-"
            Star (14, 15) "*"
            Slash (16, 17) "/"
            Ampersand (18, 19) "&"
            Pipe (20, 21) "|"
            Caret (22, 23) "^"
            Bang (24, 25) "!"
            Equal (26, 27) "="
            Eof (27, 27) """#]],
    );
}
#[test]
fn slash_and_comment() {
    check(
        "4 / 2 // half",
        expect![[r#"
            Number (0, 1) "4"
            Slash (2, 3) "/"
            Number (4, 5) "2"
            Eof (13, 13) """#]],
    );
}
#[test]
fn labels_and_symbols() {
    check(
        "bitloop:\n\tjmp !x do_zero\npico.PIO.OUT_HIGH ws2812",
        expect![[r#"
            Label (0, 8) "bitloop:"
            Eol (8, 9) "\n"
            Instruction(Jmp) (10, 13) "jmp"
            Bang (14, 15) "!"
            Symbol (15, 16) "x"
            Symbol (17, 24) "do_zero"
            Eol (24, 25) "\n"
            Symbol (25, 42) "pico.PIO.OUT_HIGH"
            Symbol (43, 49) "ws2812"
            Eof (49, 49) """#]],
    );
}
#[test]
fn directives() {
    check(
        ".origin 0\n.side_set 1 opt\n.wrap_target\n.wrap\n.lang_opt python\n.word 5\n.program p",
        expect![[r#"
            Directive(Origin) (0, 7) ".origin"
            Number (8, 9) "0"
            Eol (9, 10) "\n"
            Directive(SideSet) (10, 19) ".side_set"
            Number (20, 21) "1"
            Qualifier(Optional) (22, 25) "opt"
            Eol (25, 26) "\n"
            Directive(WrapTarget) (26, 38) ".wrap_target"
            Eol (38, 39) "\n"
            Directive(Wrap) (39, 44) ".wrap"
            Eol (44, 45) "\n"
            Directive(LangOpt) (45, 54) ".lang_opt"
            Symbol (55, 61) "python"
            Eol (61, 62) "\n"
            Directive(Word) (62, 67) ".word"
            Number (68, 69) "5"
            Eol (69, 70) "\n"
            Directive(Program) (70, 78) ".program"
            Symbol (79, 80) "p"
            Eof (80, 80) """#]],
    );
}
#[test]
fn unknown_directive() {
    check(
        ".foo 1\n.bar\nA",
        expect![[r#"
            Number (5, 6) "1"
            Eol (6, 7) "\n"
            Symbol (12, 13) "A"
            Eof (13, 13) """#]],
    );
}
#[test]
fn malformed_number() {
    check(
        "12ab 3",
        expect![[r#"error: Error { kind: MalformedNumber, at: 0 }"#]],
    );
    check(
        ".define A 1_",
        expect![[r#"
            Directive(Define) (0, 7) ".define"
            Symbol (8, 9) "A"
            error: Error { kind: MalformedNumber, at: 10 }"#]],
    );
}
#[test]
fn unexpected_char() {
    check(
        "A @",
        expect![[r#"
            Symbol (0, 1) "A"
            error: Error { kind: UnexpectedChar('@'), at: 2 }"#]],
    );
}
#[test]
fn number_values() {
    assert_eq!(super::parse_number("0"), 0);
    assert_eq!(super::parse_number("007"), 7);
    assert_eq!(super::parse_number("2147483647"), i32::MAX);
    assert_eq!(super::parse_number("2147483648"), i32::MIN);
    assert_eq!(super::parse_number("4294967296"), 0);
}
#[test]
fn line_positions() {
    positions(
        "bullshit",
        &[0, 3],
        expect![[r#"
            0 => (1, 1)
            3 => (1, 4)"#]],
    );
    positions(
        "\n\n bullshit\n",
        &[3],
        expect![[r#"3 => (3, 2)"#]],
    );
    positions(
        "A\nB\n\n  C",
        &[0, 2, 7],
        expect![[r#"
            0 => (1, 1)
            2 => (2, 1)
            7 => (4, 3)"#]],
    );
    // the first line break sits at offset zero
    positions("\nA", &[1], expect![[r#"1 => (2, 2)"#]]);
    // a line break is positioned on the line it ends
    positions(
        ".define A\nB\n",
        &[9, 10, 11],
        expect![[r#"
            9 => (1, 10)
            10 => (2, 1)
            11 => (2, 2)"#]],
    );
}
