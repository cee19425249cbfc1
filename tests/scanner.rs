#[cfg(test)]
mod scanner_tests {
    use tlox as lox;

    use lox::scanner::*;
    use lox::token::*;

    fn assert_token_sequence(source: &str, expected: &[(TokenType, &str)]) {
        let scanner = Scanner::new(source.as_bytes());
        let tokens: Vec<_> = scanner.filter_map(Result::ok).collect();

        assert_eq!(tokens.len(), expected.len());

        for (actual, (expected_type, expected_lexeme)) in tokens.iter().zip(expected.iter()) {
            assert_eq!(actual.token_type, *expected_type);
            assert_eq!(actual.lexeme, *expected_lexeme);
        }
    }

    #[test]
    fn symbols() {
        assert_token_sequence(
            "({*.,+*})",
            &[
                (TokenType::LEFT_PAREN, "("),
                (TokenType::LEFT_BRACE, "{"),
                (TokenType::STAR, "*"),
                (TokenType::DOT, "."),
                (TokenType::COMMA, ","),
                (TokenType::PLUS, "+"),
                (TokenType::STAR, "*"),
                (TokenType::RIGHT_BRACE, "}"),
                (TokenType::RIGHT_PAREN, ")"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn one_and_two_character_operators() {
        assert_token_sequence(
            "! != = == > >= < <= / - ;",
            &[
                (TokenType::BANG, "!"),
                (TokenType::BANG_EQUAL, "!="),
                (TokenType::EQUAL, "="),
                (TokenType::EQUAL_EQUAL, "=="),
                (TokenType::GREATER, ">"),
                (TokenType::GREATER_EQUAL, ">="),
                (TokenType::LESS, "<"),
                (TokenType::LESS_EQUAL, "<="),
                (TokenType::SLASH, "/"),
                (TokenType::MINUS, "-"),
                (TokenType::SEMICOLON, ";"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_token_sequence(
            "var language = lox; while true or false",
            &[
                (TokenType::VAR, "var"),
                (TokenType::IDENTIFIER, "language"),
                (TokenType::EQUAL, "="),
                (TokenType::IDENTIFIER, "lox"),
                (TokenType::SEMICOLON, ";"),
                (TokenType::WHILE, "while"),
                (TokenType::TRUE, "true"),
                (TokenType::OR, "or"),
                (TokenType::FALSE, "false"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn identifiers_may_use_underscores_and_digits() {
        assert_token_sequence(
            "_private Zoo9 classy",
            &[
                (TokenType::IDENTIFIER, "_private"),
                (TokenType::IDENTIFIER, "Zoo9"),
                (TokenType::IDENTIFIER, "classy"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn number_literals_carry_their_value() {
        let tokens: Vec<Token> = Scanner::new(b"42 3.5 0.25")
            .filter_map(Result::ok)
            .collect();

        let values: Vec<f64> = tokens
            .iter()
            .filter_map(|t| match t.token_type {
                TokenType::NUMBER(n) => Some(n),
                _ => None,
            })
            .collect();

        assert_eq!(values, vec![42.0, 3.5, 0.25]);
    }

    #[test]
    fn trailing_dot_is_not_part_of_a_number() {
        assert_token_sequence(
            "12.",
            &[
                (TokenType::NUMBER(0.0), "12"),
                (TokenType::DOT, "."),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn string_literal_payload_excludes_quotes() {
        let tokens: Vec<Token> = Scanner::new(b"\"hello\"").filter_map(Result::ok).collect();

        assert_eq!(tokens.len(), 2);
        match &tokens[0].token_type {
            TokenType::STRING(s) => assert_eq!(s, "hello"),
            other => panic!("unexpected token type: {:?}", other),
        }
        assert_eq!(tokens[0].lexeme, "\"hello\"");
    }

    #[test]
    fn strings_may_span_newlines() {
        let tokens: Vec<Token> = Scanner::new(b"\"a\nb\"\nc")
            .filter_map(Result::ok)
            .collect();

        match &tokens[0].token_type {
            TokenType::STRING(s) => assert_eq!(s, "a\nb"),
            other => panic!("unexpected token type: {:?}", other),
        }

        // The newline inside the string still advances the line counter.
        assert_eq!(tokens[1].lexeme, "c");
        assert_eq!(tokens[1].line, 3);
    }

    #[test]
    fn comments_and_whitespace_are_skipped() {
        assert_token_sequence(
            "// a comment\nprint 1; // trailing",
            &[
                (TokenType::PRINT, "print"),
                (TokenType::NUMBER(0.0), "1"),
                (TokenType::SEMICOLON, ";"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn newlines_increment_line_numbers() {
        let tokens: Vec<Token> = Scanner::new(b"a\nb\n\nc").filter_map(Result::ok).collect();

        let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 2, 4, 4]);
    }

    #[test]
    fn unexpected_character_yields_error_and_scanning_continues() {
        let results: Vec<_> = Scanner::new(b",$(").collect();

        assert_eq!(results.len(), 4);
        assert!(results[0].is_ok());

        let err = results[1].as_ref().unwrap_err();
        assert_eq!(err.to_string(), "[line 1] Error: Unexpected character: $");

        assert!(results[2].is_ok());
        // EOF still arrives after the error.
        assert!(matches!(
            results[3].as_ref().unwrap().token_type,
            TokenType::EOF
        ));
    }

    #[test]
    fn unterminated_string_is_an_error() {
        let results: Vec<_> = Scanner::new(b"\"abc").collect();

        let err = results[0].as_ref().unwrap_err();
        assert_eq!(err.to_string(), "[line 1] Error: Unterminated string.");
    }

    #[test]
    fn empty_source_is_just_eof() {
        assert_token_sequence("", &[(TokenType::EOF, "")]);
    }
}
