//! The tree-walking evaluator
//!
//! Dispatch is by node kind. Blocks evaluate in the scope handed to them;
//! the constructs that own a block (calls, conditionals, loops, classes)
//! create the child scope first, so a frame lives exactly as long as the
//! evaluation that entered it.

use super::env::{self, Scope, ScopeRef};
use super::value::{FunctionValue, Value};
use super::EvalError;
use crate::frontend::lexer::unescape_string;
use crate::frontend::parser::ast::{Node, NodeKind};
use std::rc::Rc;
use tracing::debug;

/// Result of evaluating one node: a plain value or a control signal that
/// unwinds to the construct that handles it
enum Flow {
    Value(Value),
    Return(Value),
    Break,
    Continue,
}

/// Constant evaluator with its global scope
pub struct ConstEvaluator {
    global: ScopeRef,
}

impl ConstEvaluator {
    /// Create an evaluator with an empty global scope
    pub fn new() -> Self {
        Self {
            global: Scope::root("global"),
        }
    }

    /// The global scope
    pub fn global(&self) -> &ScopeRef {
        &self.global
    }

    /// Evaluate a node in the global scope
    pub fn evaluate(&mut self, node: &Node) -> Result<Value, EvalError> {
        let scope = Rc::clone(&self.global);
        match self.eval_node(node, &scope)? {
            Flow::Value(value) | Flow::Return(value) => Ok(value),
            Flow::Break | Flow::Continue => Err(EvalError::loop_control(node)),
        }
    }

    fn eval_node(&mut self, node: &Node, scope: &ScopeRef) -> Result<Flow, EvalError> {
        match node.kind {
            NodeKind::NumberLiteral
            | NodeKind::RealLiteral
            | NodeKind::UnsignedLiteral
            | NodeKind::OctetLiteral
            | NodeKind::BitLiteral
            | NodeKind::StringLiteral
            | NodeKind::NoneValue => Ok(Flow::Value(literal_value(node)?)),

            NodeKind::Alnumus => match env::lookup(scope, &node.literal) {
                Some(value) => Ok(Flow::Value(value)),
                None => Err(EvalError::unbound(node)),
            },

            NodeKind::Expression => match node.children.first() {
                Some(inner) => self.eval_node(inner, scope),
                None => Ok(Flow::Value(Value::None)),
            },

            NodeKind::Addition
            | NodeKind::Subtraction
            | NodeKind::Multiplication
            | NodeKind::Division
            | NodeKind::Modulus => {
                let lhs = self.eval_value(child(node, 0)?, scope)?;
                let rhs = self.eval_value(child(node, 1)?, scope)?;
                Ok(Flow::Value(arithmetic(node.kind, lhs, rhs, node)?))
            }

            NodeKind::Equality | NodeKind::Inequality => {
                let lhs = self.eval_value(child(node, 0)?, scope)?;
                let rhs = self.eval_value(child(node, 1)?, scope)?;
                let equal = values_equal(&lhs, &rhs);
                let result = if node.kind == NodeKind::Equality {
                    equal
                } else {
                    !equal
                };
                Ok(Flow::Value(Value::Bit(result)))
            }

            NodeKind::Less | NodeKind::LessEq | NodeKind::Greater | NodeKind::GreaterEq => {
                let lhs = self.eval_value(child(node, 0)?, scope)?;
                let rhs = self.eval_value(child(node, 1)?, scope)?;
                Ok(Flow::Value(compare(node.kind, lhs, rhs, node)?))
            }

            NodeKind::LogicalAnd => {
                if !self.eval_bit(child(node, 0)?, scope)? {
                    return Ok(Flow::Value(Value::Bit(false)));
                }
                let rhs = self.eval_bit(child(node, 1)?, scope)?;
                Ok(Flow::Value(Value::Bit(rhs)))
            }
            NodeKind::LogicalOr => {
                if self.eval_bit(child(node, 0)?, scope)? {
                    return Ok(Flow::Value(Value::Bit(true)));
                }
                let rhs = self.eval_bit(child(node, 1)?, scope)?;
                Ok(Flow::Value(Value::Bit(rhs)))
            }

            NodeKind::Negation => {
                let operand = self.eval_value(child(node, 0)?, scope)?;
                match operand {
                    Value::Bit(b) => Ok(Flow::Value(Value::Bit(!b))),
                    other => Err(EvalError::type_mismatch(
                        format!("negation requires a bit, got {}", other.type_name()),
                        node,
                    )),
                }
            }
            NodeKind::UnaryMinus => {
                let operand = self.eval_value(child(node, 0)?, scope)?;
                negate(operand, node).map(Flow::Value)
            }
            NodeKind::UnaryPlus => {
                let operand = self.eval_value(child(node, 0)?, scope)?;
                match operand {
                    Value::Number(_)
                    | Value::Real(_)
                    | Value::Unsigned(_)
                    | Value::Octet(_)
                    | Value::Bit(_) => Ok(Flow::Value(operand)),
                    other => Err(EvalError::type_mismatch(
                        format!("unary plus requires a numeric value, got {}", other.type_name()),
                        node,
                    )),
                }
            }

            NodeKind::SimpleAssignment => self.eval_assignment(node, scope),
            NodeKind::AdditionAssignment
            | NodeKind::SubtractionAssignment
            | NodeKind::MultiplicationAssignment
            | NodeKind::DivisionAssignment
            | NodeKind::ModulusAssignment => self.eval_compound_assignment(node, scope),

            NodeKind::Period | NodeKind::DoubleColon => self.eval_member_access(node, scope),

            NodeKind::FunctionCall => self.eval_call(node, scope),

            NodeKind::AnonVariableDefinition => {
                let name = child(node, 0)?;
                self.declare(scope, name, Value::None)?;
                Ok(Flow::Value(Value::None))
            }
            NodeKind::AnonVariableDefinitionAssignment => {
                let name = child(node, 0)?;
                let value = self.eval_value(child(node, 1)?, scope)?;
                self.declare(scope, name, value.clone())?;
                Ok(Flow::Value(value))
            }
            NodeKind::ConstrainedVariableDefinition => {
                // [constraints, name] or [constraints, name, =, expr];
                // constraints are not enforced at constant-evaluation time.
                let name = child(node, 1)?;
                let value = match node.children.get(3) {
                    Some(expr) => self.eval_value(expr, scope)?,
                    None => Value::None,
                };
                self.declare(scope, name, value.clone())?;
                Ok(Flow::Value(value))
            }

            NodeKind::MethodDefinition
            | NodeKind::ShorthandVoidMethodDefinition
            | NodeKind::ShorthandConstrainedVoidMethodDefinition => {
                self.eval_function_definition(node, scope)
            }

            NodeKind::ClassDefinition => self.eval_class_definition(node, scope),

            NodeKind::Return => {
                let value = match node.children.first() {
                    Some(expression) => self.eval_value(expression, scope)?,
                    None => Value::None,
                };
                Ok(Flow::Return(value))
            }
            NodeKind::Break => Ok(Flow::Break),
            NodeKind::Continue => Ok(Flow::Continue),

            NodeKind::Print => {
                let value = self.eval_value(child(node, 0)?, scope)?;
                println!("{}", value);
                Ok(Flow::Value(Value::None))
            }

            NodeKind::If => self.eval_if(node, scope),
            NodeKind::While => self.eval_while(node, scope),
            NodeKind::For => self.eval_for(node, scope),
            NodeKind::On => {
                // The subject evaluates, then the block runs once.
                self.eval_value(child(node, 0)?, scope)?;
                let body_scope = Scope::child(scope, "on");
                self.eval_node(child(node, 1)?, &body_scope)
            }

            NodeKind::PragmaticBlock | NodeKind::FunctionalBlock => {
                self.eval_sequence(&node.children, scope)
            }

            // Type aliases carry no runtime effect at this stage.
            NodeKind::TypeDefinition => Ok(Flow::Value(Value::None)),

            _ => Err(EvalError::unsupported(node)),
        }
    }

    /// Evaluate a node that must produce a plain value
    fn eval_value(&mut self, node: &Node, scope: &ScopeRef) -> Result<Value, EvalError> {
        match self.eval_node(node, scope)? {
            Flow::Value(value) => Ok(value),
            Flow::Return(_) | Flow::Break | Flow::Continue => {
                Err(EvalError::unsupported(node))
            }
        }
    }

    /// Evaluate a node that must produce a bit
    fn eval_bit(&mut self, node: &Node, scope: &ScopeRef) -> Result<bool, EvalError> {
        match self.eval_value(node, scope)? {
            Value::Bit(b) => Ok(b),
            other => Err(EvalError::type_mismatch(
                format!("condition must be a bit, got {}", other.type_name()),
                node,
            )),
        }
    }

    /// Evaluate statements in order; the block's value is the last
    /// statement's value
    fn eval_sequence(&mut self, nodes: &[Node], scope: &ScopeRef) -> Result<Flow, EvalError> {
        let mut last = Value::None;
        for node in nodes {
            match self.eval_node(node, scope)? {
                Flow::Value(value) => last = value,
                control => return Ok(control),
            }
        }
        Ok(Flow::Value(last))
    }

    fn eval_assignment(&mut self, node: &Node, scope: &ScopeRef) -> Result<Flow, EvalError> {
        let target = child(node, 0)?;
        if target.kind != NodeKind::Alnumus {
            return Err(EvalError::type_mismatch(
                "assignment target must be a name",
                target,
            ));
        }
        let value = self.eval_value(child(node, 1)?, scope)?;
        if !env::assign(scope, &target.literal, value.clone()) {
            return Err(EvalError::unbound(target));
        }
        Ok(Flow::Value(value))
    }

    fn eval_compound_assignment(
        &mut self,
        node: &Node,
        scope: &ScopeRef,
    ) -> Result<Flow, EvalError> {
        let target = child(node, 0)?;
        if target.kind != NodeKind::Alnumus {
            return Err(EvalError::type_mismatch(
                "assignment target must be a name",
                target,
            ));
        }
        let current =
            env::lookup(scope, &target.literal).ok_or_else(|| EvalError::unbound(target))?;
        let rhs = self.eval_value(child(node, 1)?, scope)?;

        let op = match node.kind {
            NodeKind::AdditionAssignment => NodeKind::Addition,
            NodeKind::SubtractionAssignment => NodeKind::Subtraction,
            NodeKind::MultiplicationAssignment => NodeKind::Multiplication,
            NodeKind::DivisionAssignment => NodeKind::Division,
            _ => NodeKind::Modulus,
        };
        let combined = arithmetic(op, current, rhs, node)?;
        if !env::assign(scope, &target.literal, combined.clone()) {
            return Err(EvalError::unbound(target));
        }
        Ok(Flow::Value(combined))
    }

    fn eval_member_access(&mut self, node: &Node, scope: &ScopeRef) -> Result<Flow, EvalError> {
        let object = self.eval_value(child(node, 0)?, scope)?;
        let member = child(node, 1)?;
        if member.kind != NodeKind::Alnumus {
            return Err(EvalError::type_mismatch(
                "member access requires a member name",
                member,
            ));
        }
        match object {
            Value::Object(object_scope) => {
                let value = object_scope.borrow().get_local(&member.literal);
                value.map(Flow::Value).ok_or_else(|| EvalError::UnknownMember {
                    name: member.literal.clone(),
                    line: member.line,
                    col: member.col,
                })
            }
            other => Err(EvalError::type_mismatch(
                format!("member access requires an object, got {}", other.type_name()),
                node,
            )),
        }
    }

    fn eval_call(&mut self, node: &Node, scope: &ScopeRef) -> Result<Flow, EvalError> {
        let callee = child(node, 0)?;
        let arguments = child(node, 1)?;

        let callee_value = self.eval_value(callee, scope)?;
        let function = match callee_value {
            Value::Function(function) => function,
            other => {
                return Err(EvalError::NotCallable {
                    found: other.type_name(),
                    literal: callee.literal.clone(),
                    line: callee.line,
                    col: callee.col,
                })
            }
        };

        let mut args = Vec::with_capacity(arguments.children.len());
        for argument in &arguments.children {
            args.push(self.eval_value(argument, scope)?);
        }
        if args.len() != function.params.len() {
            return Err(EvalError::ArgCount {
                expected: function.params.len(),
                found: args.len(),
                literal: callee.literal.clone(),
                line: callee.line,
                col: callee.col,
            });
        }

        let captured = function.captured.upgrade().ok_or_else(|| EvalError::DeadScope {
            literal: callee.literal.clone(),
            line: callee.line,
            col: callee.col,
        })?;

        debug!("calling {}", function.name);
        let frame = Scope::child(&captured, function.name.clone());
        for (param, value) in function.params.iter().zip(args) {
            if !frame.borrow_mut().declare(param, value) {
                return Err(EvalError::Redeclaration {
                    name: param.clone(),
                    line: callee.line,
                    col: callee.col,
                });
            }
        }

        match self.eval_node(&function.body, &frame)? {
            Flow::Return(value) => Ok(Flow::Value(value)),
            Flow::Value(_) => Ok(Flow::Value(Value::None)),
            Flow::Break | Flow::Continue => Err(EvalError::loop_control(node)),
        }
    }

    fn eval_function_definition(
        &mut self,
        node: &Node,
        scope: &ScopeRef,
    ) -> Result<Flow, EvalError> {
        let offset = usize::from(
            node.children
                .first()
                .map(|c| c.kind == NodeKind::TypeConstraints)
                .unwrap_or(false),
        );
        let name = child(node, offset)?;

        let (params, body) = if node.kind == NodeKind::MethodDefinition {
            let arguments = child(node, offset + 1)?;
            let mut params = Vec::with_capacity(arguments.children.len());
            for param in &arguments.children {
                if param.kind != NodeKind::Alnumus {
                    return Err(EvalError::type_mismatch(
                        "parameter must be an identifier",
                        param,
                    ));
                }
                params.push(param.literal.clone());
            }
            (params, child(node, offset + 2)?)
        } else {
            (Vec::new(), child(node, offset + 1)?)
        };

        let function = Value::Function(Rc::new(FunctionValue {
            name: name.literal.clone(),
            params,
            body: body.clone(),
            captured: Rc::downgrade(scope),
        }));
        self.declare(scope, name, function.clone())?;
        Ok(Flow::Value(function))
    }

    fn eval_class_definition(&mut self, node: &Node, scope: &ScopeRef) -> Result<Flow, EvalError> {
        let name = child(node, 0)?;
        let block = child(node, 1)?;

        let object_scope = Scope::child(scope, name.literal.clone());
        match self.eval_node(block, &object_scope)? {
            Flow::Value(_) => {}
            _ => return Err(EvalError::unsupported(node)),
        }

        let object = Value::Object(object_scope);
        self.declare(scope, name, object.clone())?;
        Ok(Flow::Value(object))
    }

    fn eval_if(&mut self, node: &Node, scope: &ScopeRef) -> Result<Flow, EvalError> {
        if self.eval_bit(child(node, 0)?, scope)? {
            let branch_scope = Scope::child(scope, "if");
            return self.eval_node(child(node, 1)?, &branch_scope);
        }

        for branch in node.children.iter().skip(2) {
            match branch.kind {
                NodeKind::Elif => {
                    if self.eval_bit(child(branch, 0)?, scope)? {
                        let branch_scope = Scope::child(scope, "elif");
                        return self.eval_node(child(branch, 1)?, &branch_scope);
                    }
                }
                NodeKind::Else => {
                    let branch_scope = Scope::child(scope, "else");
                    return self.eval_node(child(branch, 0)?, &branch_scope);
                }
                _ => return Err(EvalError::unsupported(branch)),
            }
        }
        Ok(Flow::Value(Value::None))
    }

    fn eval_while(&mut self, node: &Node, scope: &ScopeRef) -> Result<Flow, EvalError> {
        let condition = child(node, 0)?;
        let block = child(node, 1)?;

        loop {
            if !self.eval_bit(condition, scope)? {
                break;
            }
            let iteration_scope = Scope::child(scope, "while");
            match self.eval_node(block, &iteration_scope)? {
                Flow::Value(_) | Flow::Continue => {}
                Flow::Break => break,
                Flow::Return(value) => return Ok(Flow::Return(value)),
            }
        }
        Ok(Flow::Value(Value::None))
    }

    fn eval_for(&mut self, node: &Node, scope: &ScopeRef) -> Result<Flow, EvalError> {
        let init = child(node, 0)?;
        let condition = child(node, 1)?;
        let step = child(node, 2)?;
        let block = child(node, 3)?;

        let loop_scope = Scope::child(scope, "for");

        // An assignment in the head introduces the loop counter when the
        // name is not already bound.
        let introduces_counter = init.kind == NodeKind::SimpleAssignment
            && init
                .children
                .first()
                .map(|c| c.kind == NodeKind::Alnumus && env::lookup(&loop_scope, &c.literal).is_none())
                .unwrap_or(false);
        if introduces_counter {
            let counter = child(init, 0)?;
            let value = self.eval_value(child(init, 1)?, &loop_scope)?;
            self.declare(&loop_scope, counter, value)?;
        } else {
            self.eval_value(init, &loop_scope)?;
        }

        loop {
            if !self.eval_bit(condition, &loop_scope)? {
                break;
            }
            let iteration_scope = Scope::child(&loop_scope, "iteration");
            match self.eval_node(block, &iteration_scope)? {
                Flow::Value(_) | Flow::Continue => {}
                Flow::Break => break,
                Flow::Return(value) => return Ok(Flow::Return(value)),
            }
            self.eval_value(step, &loop_scope)?;
        }
        Ok(Flow::Value(Value::None))
    }

    /// Bind a fresh name, reporting redeclaration in the same scope
    fn declare(&self, scope: &ScopeRef, name: &Node, value: Value) -> Result<(), EvalError> {
        if !scope.borrow_mut().declare(&name.literal, value) {
            return Err(EvalError::Redeclaration {
                name: name.literal.clone(),
                line: name.line,
                col: name.col,
            });
        }
        Ok(())
    }
}

impl Default for ConstEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// The `index`th child, or an error citing the parent
fn child(node: &Node, index: usize) -> Result<&Node, EvalError> {
    node.children
        .get(index)
        .ok_or_else(|| EvalError::unsupported(node))
}

/// Produce the runtime value of a literal node from its lexeme
fn literal_value(node: &Node) -> Result<Value, EvalError> {
    match node.kind {
        NodeKind::NumberLiteral => node
            .literal
            .parse::<i64>()
            .map(Value::Number)
            .map_err(|_| EvalError::malformed_literal(node)),
        NodeKind::RealLiteral => node
            .literal
            .parse::<f64>()
            .map(Value::Real)
            .map_err(|_| EvalError::malformed_literal(node)),
        NodeKind::UnsignedLiteral => node
            .literal
            .strip_suffix('u')
            .and_then(|digits| digits.parse::<u32>().ok())
            .map(Value::Unsigned)
            .ok_or_else(|| EvalError::malformed_literal(node)),
        NodeKind::OctetLiteral => {
            if node.literal.starts_with('\'') {
                let content = unescape_string(&node.literal);
                content
                    .bytes()
                    .next()
                    .map(Value::Octet)
                    .ok_or_else(|| EvalError::malformed_literal(node))
            } else {
                node.literal
                    .strip_suffix('c')
                    .and_then(|digits| digits.parse::<u8>().ok())
                    .map(Value::Octet)
                    .ok_or_else(|| EvalError::malformed_literal(node))
            }
        }
        NodeKind::BitLiteral => match node.literal.as_str() {
            "1b" => Ok(Value::Bit(true)),
            "0b" => Ok(Value::Bit(false)),
            _ => Err(EvalError::malformed_literal(node)),
        },
        NodeKind::StringLiteral => Ok(Value::Str(unescape_string(&node.literal))),
        NodeKind::NoneValue => Ok(Value::None),
        _ => Err(EvalError::unsupported(node)),
    }
}

/// Integer view of a value, excluding reals
fn as_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => Some(*n),
        Value::Unsigned(u) => Some(i64::from(*u)),
        Value::Octet(o) => Some(i64::from(*o)),
        Value::Bit(b) => Some(i64::from(*b)),
        _ => None,
    }
}

/// Real view of any numeric value
fn as_real(value: &Value) -> Option<f64> {
    match value {
        Value::Real(r) => Some(*r),
        other => as_number(other).map(|n| n as f64),
    }
}

/// Apply a binary arithmetic operator with numeric promotion
///
/// Same-variant operands keep their variant; mixed integer variants
/// promote to number; any real operand promotes the operation to real.
fn arithmetic(op: NodeKind, lhs: Value, rhs: Value, node: &Node) -> Result<Value, EvalError> {
    if matches!(lhs, Value::Real(_)) || matches!(rhs, Value::Real(_)) {
        let (a, b) = match (as_real(&lhs), as_real(&rhs)) {
            (Some(a), Some(b)) => (a, b),
            _ => return Err(arithmetic_mismatch(&lhs, &rhs, node)),
        };
        if matches!(op, NodeKind::Division | NodeKind::Modulus) && b == 0.0 {
            return Err(EvalError::DivisionByZero {
                literal: node.literal.clone(),
                line: node.line,
                col: node.col,
            });
        }
        let result = match op {
            NodeKind::Addition => a + b,
            NodeKind::Subtraction => a - b,
            NodeKind::Multiplication => a * b,
            NodeKind::Division => a / b,
            _ => a % b,
        };
        return Ok(Value::Real(result));
    }

    match (&lhs, &rhs) {
        (Value::Unsigned(a), Value::Unsigned(b)) => {
            integer_arithmetic(op, i64::from(*a), i64::from(*b), node).and_then(|n| {
                u32::try_from(n).map(Value::Unsigned).map_err(|_| overflow(node))
            })
        }
        (Value::Octet(a), Value::Octet(b)) => {
            integer_arithmetic(op, i64::from(*a), i64::from(*b), node).and_then(|n| {
                u8::try_from(n).map(Value::Octet).map_err(|_| overflow(node))
            })
        }
        _ => {
            let (a, b) = match (as_number(&lhs), as_number(&rhs)) {
                (Some(a), Some(b)) => (a, b),
                _ => return Err(arithmetic_mismatch(&lhs, &rhs, node)),
            };
            integer_arithmetic(op, a, b, node).map(Value::Number)
        }
    }
}

fn integer_arithmetic(op: NodeKind, a: i64, b: i64, node: &Node) -> Result<i64, EvalError> {
    if matches!(op, NodeKind::Division | NodeKind::Modulus) && b == 0 {
        return Err(EvalError::DivisionByZero {
            literal: node.literal.clone(),
            line: node.line,
            col: node.col,
        });
    }
    let result = match op {
        NodeKind::Addition => a.checked_add(b),
        NodeKind::Subtraction => a.checked_sub(b),
        NodeKind::Multiplication => a.checked_mul(b),
        NodeKind::Division => a.checked_div(b),
        _ => a.checked_rem(b),
    };
    result.ok_or_else(|| overflow(node))
}

/// Numeric comparison; the result is a bit
fn compare(op: NodeKind, lhs: Value, rhs: Value, node: &Node) -> Result<Value, EvalError> {
    let (a, b) = match (as_real(&lhs), as_real(&rhs)) {
        (Some(a), Some(b)) => (a, b),
        _ => {
            return Err(EvalError::type_mismatch(
                format!(
                    "comparison requires numeric values, got {} and {}",
                    lhs.type_name(),
                    rhs.type_name()
                ),
                node,
            ))
        }
    };
    let result = match op {
        NodeKind::Less => a < b,
        NodeKind::LessEq => a <= b,
        NodeKind::Greater => a > b,
        _ => a >= b,
    };
    Ok(Value::Bit(result))
}

/// Equality across values; numeric variants compare by magnitude
fn values_equal(lhs: &Value, rhs: &Value) -> bool {
    if let (Some(a), Some(b)) = (as_real(lhs), as_real(rhs)) {
        return a == b;
    }
    lhs == rhs
}

fn negate(value: Value, node: &Node) -> Result<Value, EvalError> {
    match value {
        Value::Number(n) => n
            .checked_neg()
            .map(Value::Number)
            .ok_or_else(|| overflow(node)),
        Value::Real(r) => Ok(Value::Real(-r)),
        Value::Unsigned(u) => Ok(Value::Number(-i64::from(u))),
        Value::Octet(o) => Ok(Value::Number(-i64::from(o))),
        other => Err(EvalError::type_mismatch(
            format!("unary minus requires a numeric value, got {}", other.type_name()),
            node,
        )),
    }
}

fn arithmetic_mismatch(lhs: &Value, rhs: &Value, node: &Node) -> EvalError {
    EvalError::type_mismatch(
        format!(
            "arithmetic requires numeric values, got {} and {}",
            lhs.type_name(),
            rhs.type_name()
        ),
        node,
    )
}

fn overflow(node: &Node) -> EvalError {
    EvalError::Overflow {
        literal: node.literal.clone(),
        line: node.line,
        col: node.col,
    }
}
