#[cfg(test)]
mod resolver_tests {
    use tlox as lox;

    use lox::interpreter::Interpreter;
    use lox::parser::Parser;
    use lox::resolver::Resolver;
    use lox::scanner::Scanner;

    /// Run scan + parse + resolve, returning the resolver diagnostics.
    fn resolve(source: &str) -> Vec<String> {
        let tokens = Scanner::new(source.as_bytes())
            .collect::<Result<Vec<_>, _>>()
            .expect("scan error in test source");

        let mut parser = Parser::new(tokens);
        let statements = parser.parse();
        let parse_errors = parser.take_errors();
        assert!(parse_errors.is_empty(), "parse errors: {:?}", parse_errors);

        let mut interpreter = Interpreter::with_output(Vec::new());
        Resolver::new(&mut interpreter)
            .resolve(&statements)
            .iter()
            .map(|e| e.to_string())
            .collect()
    }

    #[test]
    fn clean_program_resolves_without_errors() {
        let errors = resolve(
            "var a = 1; { var b = a; fun f(x) { return x + b; } f(2); } \
             class C { init() { this.v = 0; } get() { return this.v; } }",
        );
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn return_outside_function_is_an_error() {
        let errors = resolve("return 1;");
        assert_eq!(
            errors,
            vec!["[line 1] Error at 'return': Can't return from top-level code."]
        );
    }

    #[test]
    fn returning_a_value_from_an_initializer_is_an_error() {
        let errors = resolve("class C { init() { return 1; } }");
        assert_eq!(
            errors,
            vec!["[line 1] Error at 'return': Can't return a value from an initializer."]
        );
    }

    #[test]
    fn bare_return_in_initializer_is_allowed() {
        let errors = resolve("class C { init() { return; } }");
        assert!(errors.is_empty());
    }

    #[test]
    fn return_value_in_method_is_allowed() {
        let errors = resolve("class C { m() { return 1; } }");
        assert!(errors.is_empty());
    }

    #[test]
    fn this_outside_class_is_an_error() {
        let errors = resolve("print this;");
        assert_eq!(
            errors,
            vec!["[line 1] Error at 'this': Can't use 'this' outside of a class."]
        );
    }

    #[test]
    fn this_in_a_plain_function_is_an_error() {
        let errors = resolve("fun f() { print this; }");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Can't use 'this' outside of a class."));
    }

    #[test]
    fn super_outside_class_is_an_error() {
        let errors = resolve("print super.m;");
        assert_eq!(
            errors,
            vec!["[line 1] Error at 'super': Can't use 'super' outside of a class."]
        );
    }

    #[test]
    fn super_without_superclass_is_an_error() {
        let errors = resolve("class C { m() { super.m(); } }");
        assert_eq!(
            errors,
            vec!["[line 1] Error at 'super': Can't use 'super' in a class with no superclass."]
        );
    }

    #[test]
    fn super_in_subclass_is_allowed() {
        let errors = resolve("class A { m() {} } class B < A { m() { super.m(); } }");
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn class_cannot_inherit_from_itself() {
        let errors = resolve("class A < A {}");
        assert_eq!(
            errors,
            vec!["[line 1] Error at 'A': A class can't inherit from itself."]
        );
    }

    #[test]
    fn reading_a_local_in_its_own_initializer_is_an_error() {
        let errors = resolve("var a = 1; { var a = a; }");
        assert_eq!(
            errors,
            vec!["[line 1] Error at 'a': Can't read local variable in its own initializer."]
        );
    }

    #[test]
    fn global_self_reference_in_initializer_is_allowed() {
        // Top-level code has no local scope, so this resolves to the global
        // lookup path.
        let errors = resolve("var a = a;");
        assert!(errors.is_empty());
    }

    #[test]
    fn redeclaration_in_local_scope_is_an_error() {
        let errors = resolve("{ var a = 1; var a = 2; }");
        assert_eq!(
            errors,
            vec!["[line 1] Error at 'a': Already a variable with this name in this scope."]
        );
    }

    #[test]
    fn redeclaration_at_global_scope_is_permitted() {
        let errors = resolve("var a = 1; var a = 2;");
        assert!(errors.is_empty());
    }

    #[test]
    fn duplicate_parameters_are_an_error() {
        let errors = resolve("fun f(a, a) {}");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Already a variable with this name in this scope."));
    }

    #[test]
    fn resolution_continues_past_errors() {
        let errors = resolve("return 1;\nprint this;\n{ var a = 1; var a = 2; }");
        assert_eq!(errors.len(), 3);
    }
}
