use super::*;
use crate::imports::CollectedImports;
use crate::matchers::IdentityNormalizer;
use remock_ast::{
    Block, ClassType, ExpectationBlock, Expression, JavaType, Literal, Span, Statement,
};

fn span() -> Span {
    Span::dummy()
}

fn service() -> Expression {
    Expression::Identifier {
        name: "svc".to_string(),
        java_type: Some(JavaType::class("com.example.Service")),
        span: span(),
    }
}

fn invoke(name: &str, args: Vec<Expression>) -> Statement {
    Statement::Invocation {
        receiver: Some(service()),
        name: name.to_string(),
        args,
        span: span(),
    }
}

fn returns(args: Vec<Expression>) -> Statement {
    Statement::Invocation {
        receiver: None,
        name: "returns".to_string(),
        args,
        span: span(),
    }
}

fn assign(target: &str, value: Expression) -> Statement {
    Statement::Assignment {
        target: target.to_string(),
        value,
        span: span(),
    }
}

fn string_lit(text: &str) -> Expression {
    Expression::Literal(Literal::String(text.to_string()), span())
}

fn int_lit(text: &str) -> Expression {
    Expression::Literal(Literal::Number(text.to_string()), span())
}

fn new_exception(message: Option<&str>) -> Expression {
    Expression::New {
        class: ClassType::extending(
            "java.lang.IllegalStateException",
            vec![
                "java.lang.RuntimeException".to_string(),
                "java.lang.Throwable".to_string(),
            ],
        ),
        args: message.map(string_lit).into_iter().collect(),
        span: span(),
    }
}

fn expectations(statements: Vec<Statement>) -> Statement {
    Statement::Expectations(ExpectationBlock {
        body: Block::new(statements, span()),
        span: span(),
    })
}

fn snippet(text: &str) -> Statement {
    Statement::Snippet {
        text: text.to_string(),
        span: span(),
    }
}

fn body_of(statements: Vec<Statement>) -> Block {
    Block::new(statements, span())
}

fn texts(body: &Block) -> Vec<String> {
    body.statements
        .iter()
        .map(|statement| match statement {
            Statement::Snippet { text, .. } => text.clone(),
            other => format!("{:?}", other),
        })
        .collect()
}

fn rewrite(body: Block, index: usize) -> (Result<Block, RewriteError>, CollectedImports) {
    let mut imports = CollectedImports::new();
    let result = rewrite_expectations(body, index, &IdentityNormalizer, &mut imports);
    (result, imports)
}

#[test]
fn single_primitive_result_replaces_construct() {
    let body = body_of(vec![
        expectations(vec![invoke("getValue", vec![]), assign("result", int_lit("42"))]),
        snippet("assertEquals(42, svc.getValue());"),
    ]);

    let (result, imports) = rewrite(body, 0);
    let body = result.unwrap();

    assert_eq!(
        texts(&body),
        vec![
            "when(svc.getValue()).thenReturn(42);",
            "assertEquals(42, svc.getValue());",
        ]
    );
    assert!(imports.added.contains(WHEN_IMPORT));
    assert!(!imports.added.contains(VERIFY_IMPORT));
    assert!(imports.removed.contains(EXPECTATIONS_IMPORT));
}

#[test]
fn string_result_with_times_produces_stub_and_appended_verification() {
    let body = body_of(vec![
        expectations(vec![
            invoke("getValue", vec![]),
            assign("result", string_lit("x")),
            assign("times", int_lit("2")),
        ]),
        snippet("svc.getValue();"),
    ]);

    let (result, imports) = rewrite(body, 0);
    let body = result.unwrap();

    assert_eq!(
        texts(&body),
        vec![
            "when(svc.getValue()).thenReturn(\"x\");",
            "svc.getValue();",
            "verify(svc, times(2)).getValue();",
        ]
    );
    assert!(imports.added.contains(WHEN_IMPORT));
    assert!(imports.added.contains(VERIFY_IMPORT));
    assert!(imports.added.contains(TIMES_IMPORT));
    assert!(imports.added.contains("com.example.Service"));
    assert!(imports.removed.contains(EXPECTATIONS_IMPORT));
}

#[test]
fn throwable_result_uses_throw_shape() {
    let body = body_of(vec![expectations(vec![
        invoke("getValue", vec![]),
        assign("result", new_exception(Some("boom"))),
    ])]);

    let (result, _) = rewrite(body, 0);
    let body = result.unwrap();

    assert_eq!(
        texts(&body),
        vec!["when(svc.getValue()).thenThrow(new IllegalStateException(\"boom\"));"]
    );
}

#[test]
fn count_only_group_removes_construct_and_appends_verification() {
    let body = body_of(vec![
        expectations(vec![invoke("getValue", vec![]), assign("times", int_lit("2"))]),
        snippet("svc.getValue();"),
    ]);

    let (result, imports) = rewrite(body, 0);
    let body = result.unwrap();

    assert_eq!(
        texts(&body),
        vec!["svc.getValue();", "verify(svc, times(2)).getValue();"]
    );
    assert!(!imports.added.contains(WHEN_IMPORT));
    assert!(imports.added.contains(VERIFY_IMPORT));
    assert!(imports.added.contains(TIMES_IMPORT));
}

#[test]
fn empty_first_statement_group_deletes_construct_only() {
    let body = body_of(vec![
        expectations(vec![invoke("getValue", vec![])]),
        snippet("svc.getValue();"),
    ]);

    let (result, imports) = rewrite(body, 0);
    let body = result.unwrap();

    assert_eq!(texts(&body), vec!["svc.getValue();"]);
    assert!(imports.added.is_empty());
    assert!(imports.removed.contains(EXPECTATIONS_IMPORT));
}

#[test]
fn returns_continuation_chains_results_into_one_stub() {
    let body = body_of(vec![expectations(vec![
        invoke("getValue", vec![]),
        returns(vec![int_lit("1"), int_lit("2")]),
        assign("result", int_lit("3")),
    ])]);

    let (result, _) = rewrite(body, 0);
    let body = result.unwrap();

    assert_eq!(
        texts(&body),
        vec!["when(svc.getValue()).thenReturn(1, 2, 3);"]
    );
}

#[test]
fn groups_keep_source_order_and_verifications_batch_at_end() {
    let body = body_of(vec![
        expectations(vec![
            invoke("getValue", vec![]),
            assign("result", int_lit("1")),
            assign("times", int_lit("1")),
            invoke("getName", vec![]),
            assign("result", string_lit("n")),
            assign("times", int_lit("2")),
        ]),
        snippet("run();"),
    ]);

    let (result, _) = rewrite(body, 0);
    let body = result.unwrap();

    assert_eq!(
        texts(&body),
        vec![
            "when(svc.getValue()).thenReturn(1);",
            "when(svc.getName()).thenReturn(\"n\");",
            "run();",
            "verify(svc, times(1)).getValue();",
            "verify(svc, times(2)).getName();",
        ]
    );
}

#[test]
fn mid_body_construct_replaces_in_place() {
    let body = body_of(vec![
        snippet("setup();"),
        expectations(vec![
            invoke("getValue", vec![]),
            assign("result", int_lit("7")),
        ]),
        snippet("svc.getValue();"),
    ]);

    let (result, _) = rewrite(body, 1);
    let body = result.unwrap();

    assert_eq!(
        texts(&body),
        vec![
            "setup();",
            "when(svc.getValue()).thenReturn(7);",
            "svc.getValue();",
        ]
    );
}

#[test]
fn verification_reproduces_invocation_arguments() {
    let key_arg = Expression::Identifier {
        name: "key".to_string(),
        java_type: Some(JavaType::string()),
        span: span(),
    };
    let body = body_of(vec![expectations(vec![
        invoke("lookup", vec![string_lit("a"), key_arg]),
        assign("times", int_lit("1")),
    ])]);

    let (result, _) = rewrite(body, 0);
    let body = result.unwrap();

    assert_eq!(
        texts(&body),
        vec!["verify(svc, times(1)).lookup(\"a\", key);"]
    );
}

#[test]
fn count_configuration_must_be_last() {
    let body = body_of(vec![expectations(vec![
        invoke("getValue", vec![]),
        assign("times", int_lit("2")),
        assign("result", int_lit("1")),
    ])]);

    let (result, _) = rewrite(body, 0);
    let err = result.unwrap_err();
    assert!(matches!(err, RewriteError::CountMustBeLast { .. }));
    assert!(err.is_structural());
}

#[test]
fn returns_continuation_after_count_is_rejected() {
    let body = body_of(vec![expectations(vec![
        invoke("getValue", vec![]),
        assign("times", int_lit("2")),
        returns(vec![int_lit("1")]),
    ])]);

    let (result, _) = rewrite(body, 0);
    assert!(matches!(
        result.unwrap_err(),
        RewriteError::CountMustBeLast { .. }
    ));
}

#[test]
fn multiple_results_are_incompatible_with_count() {
    let body = body_of(vec![expectations(vec![
        invoke("getValue", vec![]),
        assign("result", int_lit("1")),
        assign("result", int_lit("2")),
        assign("times", int_lit("2")),
    ])]);

    let (result, _) = rewrite(body, 0);
    assert!(matches!(
        result.unwrap_err(),
        RewriteError::MultipleResultsWithCount { .. }
    ));
}

#[test]
fn unexpected_assignment_target_is_rejected() {
    let body = body_of(vec![expectations(vec![
        invoke("getValue", vec![]),
        assign("minTimes", int_lit("1")),
    ])]);

    let (result, _) = rewrite(body, 0);
    match result.unwrap_err() {
        RewriteError::UnexpectedAssignmentTarget { name, .. } => assert_eq!(name, "minTimes"),
        other => panic!("expected UnexpectedAssignmentTarget, got {other:?}"),
    }
}

#[test]
fn mixed_thrown_and_returned_results_are_rejected() {
    let body = body_of(vec![expectations(vec![
        invoke("getValue", vec![]),
        assign("result", string_lit("x")),
        assign("result", new_exception(None)),
    ])]);

    let (result, _) = rewrite(body, 0);
    assert!(matches!(
        result.unwrap_err(),
        RewriteError::MixedResultKinds { .. }
    ));
}

#[test]
fn configuration_before_any_invocation_is_rejected() {
    let body = body_of(vec![expectations(vec![assign(
        "result",
        int_lit("1"),
    )])]);

    let (result, _) = rewrite(body, 0);
    assert!(matches!(
        result.unwrap_err(),
        RewriteError::UnexpectedConfigurationStatement { .. }
    ));
}

#[test]
fn untyped_receiver_fails_verification_resolution() {
    let untyped = Expression::Identifier {
        name: "svc".to_string(),
        java_type: None,
        span: span(),
    };
    let body = body_of(vec![expectations(vec![
        Statement::Invocation {
            receiver: Some(untyped),
            name: "getValue".to_string(),
            args: vec![],
            span: span(),
        },
        assign("times", int_lit("1")),
    ])]);

    let (result, _) = rewrite(body, 0);
    let err = result.unwrap_err();
    assert!(matches!(err, RewriteError::MissingTypeInformation { .. }));
    assert!(!err.is_structural());
}

#[test]
fn non_identifier_receiver_verifies_without_qualifier() {
    let nested = Expression::FieldAccess {
        receiver: Box::new(Expression::Identifier {
            name: "holder".to_string(),
            java_type: Some(JavaType::class("com.example.Holder")),
            span: span(),
        }),
        name: "svc".to_string(),
        java_type: Some(JavaType::class("com.example.Service")),
        span: span(),
    };
    let body = body_of(vec![expectations(vec![
        Statement::Invocation {
            receiver: Some(nested),
            name: "getValue".to_string(),
            args: vec![],
            span: span(),
        },
        assign("times", int_lit("1")),
    ])]);

    let (result, imports) = rewrite(body, 0);
    let body = result.unwrap();

    assert_eq!(
        texts(&body),
        vec!["verify(holder.svc, times(1)).getValue();"]
    );
    assert!(!imports.added.contains("com.example.Service"));
}

#[test]
fn rewrite_rejects_non_expectation_statement() {
    let body = body_of(vec![snippet("run();")]);
    let (result, _) = rewrite(body, 0);
    assert!(matches!(
        result.unwrap_err(),
        RewriteError::InvalidConstruct { index: 0, .. }
    ));
}

#[test]
fn rewrite_rejects_out_of_range_index() {
    let body = body_of(vec![]);
    let (result, _) = rewrite(body, 3);
    assert!(matches!(
        result.unwrap_err(),
        RewriteError::InvalidConstruct { index: 3, .. }
    ));
}

#[test]
fn parameterized_result_stubs_through_raw_type_slot() {
    let list = Expression::Identifier {
        name: "names".to_string(),
        java_type: Some(JavaType::Parameterized {
            base: ClassType::new("java.util.List"),
            type_args: vec![JavaType::string()],
        }),
        span: span(),
    };
    let body = body_of(vec![expectations(vec![
        invoke("getNames", vec![]),
        assign("result", list),
    ])]);

    let (result, _) = rewrite(body, 0);
    let body = result.unwrap();

    assert_eq!(texts(&body), vec!["when(svc.getNames()).thenReturn(names);"]);
}

#[test]
fn stub_template_source_lists_one_typed_slot_per_result() {
    let results = vec![int_lit("1"), string_lit("x")];
    let template = select_stub_template(&results).unwrap();
    assert_eq!(template.kind, StubKind::Return);
    assert_eq!(
        template.source(),
        "when(#{any()}).thenReturn(#{}, #{any(java.lang.String)});"
    );

    let throwing = vec![new_exception(None)];
    let template = select_stub_template(&throwing).unwrap();
    assert_eq!(template.kind, StubKind::Throw);
    assert_eq!(template.source(), "when(#{any()}).thenThrow(#{any()});");
}

#[test]
fn verify_template_source_embeds_receiver_type_and_arguments() {
    let invocation = MockInvocation {
        receiver: Some(service()),
        name: "lookup".to_string(),
        args: vec![string_lit("a")],
        span: span(),
    };
    let template = select_verify_template(&invocation).unwrap();
    assert_eq!(template.receiver_fqn, "com.example.Service");
    assert_eq!(
        template.source(&invocation),
        "verify(#{any(com.example.Service)}, times(#{any(int)})).#{}(\"a\");"
    );
}
