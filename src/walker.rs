//! The generic tree walker: pure pre/post-order recursion with no
//! knowledge of node semantics. Both analysis passes are built by
//! supplying a pair of callbacks to [`traverse`], threaded through an
//! explicit context value rather than captured by the closures — this is
//! what lets both callbacks mutate the same `Analyzer` without the two
//! closures fighting over a shared `&mut` borrow.

use crate::ast::AstNode;

/// Visit `node` pre-order, recurse into every child in source order unless
/// `pre` returns `false`, then visit `node` post-order. Never mutates the
/// tree itself. The boolean return from `pre` is the one piece of control
/// a caller has over the walk — used by pass 1 to stop at a declaration
/// it has already rejected rather than re-processing its bindings.
pub fn traverse<C>(
    node: &AstNode,
    ctx: &mut C,
    pre: &mut dyn FnMut(&mut C, &AstNode) -> bool,
    post: &mut dyn FnMut(&mut C, &AstNode),
) {
    let descend = pre(ctx, node);
    if descend {
        match node {
            AstNode::Program(decls) => {
                for decl in decls {
                    traverse(decl, ctx, pre, post);
                }
            }
            AstNode::VarDecl { .. } | AstNode::Param { .. } | AstNode::Const { .. } => {}
            AstNode::FunDecl { params, body, .. } => {
                for param in params {
                    traverse(param, ctx, pre, post);
                }
                traverse(body, ctx, pre, post);
            }
            AstNode::Compound { locals, stmts, .. } => {
                for local in locals {
                    traverse(local, ctx, pre, post);
                }
                for stmt in stmts {
                    traverse(stmt, ctx, pre, post);
                }
            }
            AstNode::If { cond, then_branch, else_branch, .. } => {
                traverse(cond, ctx, pre, post);
                traverse(then_branch, ctx, pre, post);
                if let Some(else_branch) = else_branch {
                    traverse(else_branch, ctx, pre, post);
                }
            }
            AstNode::While { cond, body, .. } => {
                traverse(cond, ctx, pre, post);
                traverse(body, ctx, pre, post);
            }
            AstNode::Return { expr, .. } => {
                if let Some(expr) = expr {
                    traverse(expr, ctx, pre, post);
                }
            }
            AstNode::ExprStmt(inner) => {
                traverse(inner, ctx, pre, post);
            }
            AstNode::Id { index, .. } => {
                if let Some(index) = index {
                    traverse(index, ctx, pre, post);
                }
            }
            AstNode::Call { args, .. } => {
                for arg in args {
                    traverse(arg, ctx, pre, post);
                }
            }
            AstNode::BinOp { lhs, rhs, .. } => {
                traverse(lhs, ctx, pre, post);
                traverse(rhs, ctx, pre, post);
            }
        }
    }
    post(ctx, node);
}

#[cfg(test)]
mod test {
    use super::traverse;
    use crate::ast::build::*;
    use crate::ast::Type;

    #[test]
    fn visits_every_node_pre_and_post() {
        let ast = program(vec![fun_decl(
            "main",
            Type::Void,
            vec![],
            compound(vec![var_decl("x", Type::Integer, 1)], vec![expr_stmt(assign("x", const_(1, 2), 2))], 1),
            1,
        )]);

        let mut pre_count = 0usize;
        let mut post_count = 0usize;
        traverse(
            &ast,
            &mut (),
            &mut |_, _| {
                pre_count += 1;
                true
            },
            &mut |_, _| post_count += 1,
        );

        // Program, FunDecl, Compound, VarDecl, ExprStmt, BinOp(assign), Id(x), Const(1) = 8
        assert_eq!(pre_count, 8);
        assert_eq!(post_count, 8);
    }

    #[test]
    fn pre_order_visits_parent_before_children() {
        let ast = program(vec![var_decl("x", Type::Integer, 1)]);
        let mut order: Vec<String> = Vec::new();
        traverse(
            &ast,
            &mut order,
            &mut |order, n| {
                order.push(format!("{n:?}"));
                true
            },
            &mut |_, _| {},
        );
        assert!(order[0].starts_with("Program"));
        assert!(order[1].starts_with("VarDecl"));
    }

    #[test]
    fn pre_can_skip_a_subtree() {
        let ast = program(vec![fun_decl(
            "f",
            Type::Integer,
            vec![param("x", Type::Integer, 1)],
            compound(vec![], vec![], 1),
            1,
        )]);

        let mut visited: Vec<String> = Vec::new();
        traverse(
            &ast,
            &mut visited,
            &mut |visited, n| {
                let tag = format!("{n:?}");
                let is_fun = tag.starts_with("FunDecl");
                visited.push(tag);
                !is_fun
            },
            &mut |_, _| {},
        );

        assert_eq!(visited.len(), 2, "Program and FunDecl only, params/body skipped");
    }
}
