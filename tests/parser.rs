#[cfg(test)]
mod parser_tests {
    use tlox as lox;

    use lox::expr::Expr;
    use lox::parser::Parser;
    use lox::scanner::Scanner;
    use lox::stmt::Stmt;
    use lox::token::Token;

    fn scan(source: &str) -> Vec<Token> {
        Scanner::new(source.as_bytes())
            .collect::<Result<Vec<_>, _>>()
            .expect("scan error in test source")
    }

    fn parse(source: &str) -> (Vec<Stmt>, Vec<String>) {
        let mut parser = Parser::new(scan(source));
        let statements = parser.parse();
        let errors = parser.take_errors().iter().map(|e| e.to_string()).collect();
        (statements, errors)
    }

    #[test]
    fn simple_statements_parse_cleanly() {
        let (statements, errors) = parse("print 1 + 2 * 3; var a = \"x\"; a = a;");
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
        assert_eq!(statements.len(), 3);
    }

    #[test]
    fn missing_operand_reports_expect_expression() {
        let (_, errors) = parse("print 1 +;");
        assert_eq!(errors, vec!["[line 1] Error at ';': Expect expression."]);
    }

    #[test]
    fn error_at_eof_reports_at_end() {
        let (_, errors) = parse("print 1");
        assert_eq!(
            errors,
            vec!["[line 1] Error at end: Expect ';' after value."]
        );
    }

    #[test]
    fn invalid_assignment_target_is_reported_but_not_fatal() {
        let (statements, errors) = parse("1 = 2;");

        assert_eq!(errors, vec!["[line 1] Error at '=': Invalid assignment target."]);
        // Parsing continued with the left-hand side.
        assert_eq!(statements.len(), 1);
        assert!(matches!(
            statements[0],
            Stmt::Expression(Expr::Literal(_))
        ));
    }

    #[test]
    fn synchronization_recovers_and_surfaces_later_errors() {
        let (statements, errors) = parse("var 1 = 2;\nprint \"ok\";\n+;\nprint 3;");

        // Two independent diagnostics, and the statements between them still
        // parse.
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("Expect variable name."));
        assert!(errors[1].contains("Expect expression."));
        assert_eq!(statements.len(), 2);
    }

    #[test]
    fn for_desugars_into_while_wrapped_in_blocks() {
        let (statements, errors) = parse("for (var i = 0; i < 3; i = i + 1) print i;");
        assert!(errors.is_empty());
        assert_eq!(statements.len(), 1);

        // Outer block: [initializer, while].
        let outer = match &statements[0] {
            Stmt::Block(stmts) => stmts,
            other => panic!("expected block, got {:?}", other),
        };
        assert_eq!(outer.len(), 2);
        assert!(matches!(outer[0], Stmt::Var { .. }));

        // The while body is a block of [original body, increment].
        let body = match &outer[1] {
            Stmt::While { body, .. } => body,
            other => panic!("expected while, got {:?}", other),
        };
        let inner = match body.as_ref() {
            Stmt::Block(stmts) => stmts,
            other => panic!("expected block body, got {:?}", other),
        };
        assert_eq!(inner.len(), 2);
        assert!(matches!(inner[0], Stmt::Print(_)));
        assert!(matches!(inner[1], Stmt::Expression(Expr::Assign { .. })));
    }

    #[test]
    fn for_without_clauses_defaults_condition_to_true() {
        let (statements, errors) = parse("for (;;) print 1;");
        assert!(errors.is_empty());

        // No initializer, so no wrapping block.
        assert!(matches!(
            statements[0],
            Stmt::While {
                condition: Expr::Literal(_),
                ..
            }
        ));
    }

    #[test]
    fn class_with_superclass_and_methods() {
        let (statements, errors) = parse("class B < A { init(x) { this.x = x; } m() { return 1; } }");
        assert!(errors.is_empty());

        match &statements[0] {
            Stmt::Class {
                name,
                superclass,
                methods,
            } => {
                assert_eq!(name.lexeme, "B");
                assert!(matches!(superclass, Some(Expr::Variable(_, t)) if t.lexeme == "A"));
                assert_eq!(methods.len(), 2);
                assert_eq!(methods[0].name.lexeme, "init");
                assert_eq!(methods[0].params.len(), 1);
            }
            other => panic!("expected class, got {:?}", other),
        }
    }

    #[test]
    fn distinct_variable_occurrences_get_distinct_ids() {
        let (statements, errors) = parse("x; x;");
        assert!(errors.is_empty());

        let ids: Vec<_> = statements
            .iter()
            .map(|s| match s {
                Stmt::Expression(Expr::Variable(id, _)) => *id,
                other => panic!("expected variable expression, got {:?}", other),
            })
            .collect();

        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn too_many_arguments_is_reported_without_aborting() {
        let args = (0..256).map(|n| n.to_string()).collect::<Vec<_>>().join(", ");
        let source = format!("f({});", args);

        let (statements, errors) = parse(&source);

        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Can't have more than 255 arguments."));
        // The call itself still parses.
        assert_eq!(statements.len(), 1);
        assert!(matches!(
            statements[0],
            Stmt::Expression(Expr::Call { .. })
        ));
    }

    #[test]
    fn super_requires_a_method_name() {
        let (_, errors) = parse("class B < A { m() { super; } }");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Expect '.' after 'super'."));
    }
}
