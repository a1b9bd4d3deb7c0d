#[cfg(test)]
mod tests {
    use crate::{AstNode, Operator, Parser};

    fn parse(source: &str) -> AstNode {
        Parser::parse(source).expect("expected successful parse")
    }

    fn parse_err(source: &str) -> spl_util::CompilerError {
        Parser::parse(source).expect_err("expected a parse failure")
    }

    #[test]
    fn full_play_produces_expected_tree_shape() {
        let source = "\
The Two Gentlemen of Fair Verona.

Romeo, a pretty flower.
Juliet, a beautiful flower.

Act I: The Only Act.

Scene I: A Declaration.

[Enter Romeo and Juliet]

Romeo: You are as beautiful as the sum of a flower and a flower.

Juliet: Speak your mind.

[Exeunt]
";
        let play = parse(source);
        let AstNode::Label { name, children } = play else {
            panic!("root must be a Label");
        };
        assert_eq!(name, "play");

        // Two preamble assignments, then a single act.
        assert!(matches!(children[0], AstNode::Assign { static_decl: true, .. }));
        assert!(matches!(children[1], AstNode::Assign { static_decl: true, .. }));
        let AstNode::Label { name: act_name, children: act_children } = &children[2] else {
            panic!("expected an act label");
        };
        assert_eq!(act_name, "act 1");
        assert_eq!(act_children.len(), 1);

        let AstNode::Label { name: scene_name, children: scene_children } = &act_children[0]
        else {
            panic!("expected a scene label");
        };
        assert_eq!(scene_name, "act 1 scene 1");

        // [Enter ...] and [Exeunt] both lower to NoOp.
        assert_eq!(scene_children[0], AstNode::NoOp);
        assert_eq!(*scene_children.last().unwrap(), AstNode::NoOp);
    }

    #[test]
    fn redeclared_character_is_a_syntax_error() {
        let source = "\
Title.

Romeo, a flower.
Romeo, a flower.

Act I: Only act.

Scene I: Only scene.

[Enter Romeo]

Romeo: You are as good as a flower.

[Exeunt]
";
        let err = parse_err(source);
        assert!(matches!(err, spl_util::CompilerError::Syntax(_)));
        assert!(err.to_string().contains("romeo"));
    }

    #[test]
    fn entering_an_already_onstage_character_fails() {
        let source = "\
Title.

Romeo, a flower.

Act I: Only act.

Scene I: Only scene.

[Enter Romeo]

[Enter Romeo]

Romeo: You are as good as a flower.

[Exeunt]
";
        assert!(matches!(
            parse_err(source),
            spl_util::CompilerError::Syntax(_)
        ));
    }

    #[test]
    fn scene_ending_with_cast_still_onstage_fails() {
        let source = "\
Title.

Romeo, a flower.

Act I: Only act.

Scene I: Only scene.

[Enter Romeo]

Romeo: You are as good as a flower.
";
        assert!(matches!(
            parse_err(source),
            spl_util::CompilerError::Syntax(_)
        ));
    }

    #[test]
    fn second_pronoun_requires_exactly_two_onstage() {
        let source = "\
Title.

Romeo, a flower.
Juliet, a flower.
Hamlet, a flower.

Act I: Only act.

Scene I: Only scene.

[Enter Romeo and Juliet and Hamlet]

Romeo: You are as good as a flower.

[Exeunt]
";
        assert!(matches!(
            parse_err(source),
            spl_util::CompilerError::Syntax(_)
        ));
    }

    #[test]
    fn adjective_chain_doubles_via_nested_multiply() {
        let source = "\
Title.

Romeo, a flower.
Juliet, a flower.

Act I: Only act.

Scene I: Only scene.

[Enter Romeo and Juliet]

Romeo: You are as good as a fair fair flower.

[Exeunt]
";
        let play = parse(source);
        let AstNode::Label { children, .. } = play else {
            unreachable!()
        };
        let AstNode::Label {
            children: act_children,
            ..
        } = &children[2]
        else {
            unreachable!()
        };
        let AstNode::Label {
            children: scene_children,
            ..
        } = &act_children[0]
        else {
            unreachable!()
        };

        // Enter, then the assignment, then Exeunt.
        let AstNode::Assign { expr, var, static_decl } = &scene_children[1] else {
            panic!("expected an assignment statement");
        };
        assert_eq!(var, "juliet");
        assert!(!static_decl);
        let AstNode::BinaryOperator {
            op: Operator::Multiply,
            left,
            right,
        } = expr.as_ref()
        else {
            panic!("expected the outer operator to be a doubling multiply");
        };
        assert_eq!(**left, AstNode::Value(2));
        assert!(matches!(
            right.as_ref(),
            AstNode::BinaryOperator {
                op: Operator::Multiply,
                ..
            }
        ));
    }

    #[test]
    fn goto_and_conditional_goto_resolve_to_act_scene_labels() {
        let source = "\
Title.

Romeo, a flower.
Juliet, a flower.

Act I: Only act.

Scene I: First scene.

[Enter Romeo and Juliet]

Romeo: Am I equal to you?

Romeo: If so, let us proceed to scene II.

Juliet: Let us proceed to act I.

[Exeunt]

Scene II: Second scene.

[Enter Romeo and Juliet]

Romeo: Speak your mind.

[Exeunt]
";
        let play = parse(source);
        let AstNode::Label { children, .. } = play else {
            unreachable!()
        };
        let AstNode::Label {
            children: act_children,
            ..
        } = &children[2]
        else {
            unreachable!()
        };
        let AstNode::Label {
            children: scene_children,
            ..
        } = &act_children[0]
        else {
            unreachable!()
        };

        assert!(matches!(scene_children[1], AstNode::Compare { .. }));
        assert_eq!(
            scene_children[2],
            AstNode::ConditionalGoto("act 1 scene 2".to_string())
        );
        assert_eq!(scene_children[3], AstNode::Goto("act 1".to_string()));
    }
}
