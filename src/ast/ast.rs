use super::expressions::{BinaryExpr, GroupingExpr, LiteralExpr, UnaryExpr};

/// Expression Types
///
/// Tags for the kinds of expressions in the AST.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Binary,
    Grouping,
    Literal,
    Unary,
}

/// Expression
///
/// A closed set of expression nodes. Children are owned by their parent, so
/// a tree is acyclic and is dropped as a whole.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(BinaryExpr),
    Grouping(GroupingExpr),
    Literal(LiteralExpr),
    Unary(UnaryExpr),
}

impl Expr {
    /// Returns the expression type of the expression.
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Binary(_) => ExprType::Binary,
            Expr::Grouping(_) => ExprType::Grouping,
            Expr::Literal(_) => ExprType::Literal,
            Expr::Unary(_) => ExprType::Unary,
        }
    }

    /// Number of operator and grouping levels above the deepest literal.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Binary(expr) => expr.left.depth().max(expr.right.depth()) + 1,
            Expr::Grouping(expr) => expr.expression.depth() + 1,
            Expr::Literal(_) => 0,
            Expr::Unary(expr) => expr.right.depth() + 1,
        }
    }

    /// Routes to the visitor method matching this node.
    pub fn accept<R, V: ExprVisitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        match self {
            Expr::Binary(expr) => visitor.visit_binary_expr(expr),
            Expr::Grouping(expr) => visitor.visit_grouping_expr(expr),
            Expr::Literal(expr) => visitor.visit_literal_expr(expr),
            Expr::Unary(expr) => visitor.visit_unary_expr(expr),
        }
    }
}

/// Expression Visitor
///
/// One method per expression node. Each traversal over the tree (evaluation,
/// printing) implements this trait once.
pub trait ExprVisitor<R> {
    fn visit_binary_expr(&mut self, expr: &BinaryExpr) -> R;
    fn visit_grouping_expr(&mut self, expr: &GroupingExpr) -> R;
    fn visit_literal_expr(&mut self, expr: &LiteralExpr) -> R;
    fn visit_unary_expr(&mut self, expr: &UnaryExpr) -> R;
}
