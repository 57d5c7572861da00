//! Builtin dispatch tables
//!
//! Three tables map exact words to behavior: binary operators, unary
//! operators (including the `>KIND` conversions) and actions. They are
//! consulted in that order, so a word present in more than one table resolves
//! to the earliest.

use std::collections::HashMap;

use core_types::{apply_binary, BinaryOp, ClacError, ClacResult, Kind, UnaryOp};

use crate::actions::{self, Action};
use crate::context::Context;

/// Behavior of a unary word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryWord {
    /// Apply a unary operation
    Apply(UnaryOp),
    /// Convert to a kind
    Convert(Kind),
}

/// Binary operator words
pub static BINARY_WORDS: &[(&str, BinaryOp)] = &[
    ("+", BinaryOp::Add),
    ("-", BinaryOp::Sub),
    ("*", BinaryOp::Mul),
    ("/", BinaryOp::Div),
    ("==", BinaryOp::Eq),
    ("!=", BinaryOp::Ne),
    (">", BinaryOp::Gt),
    (">=", BinaryOp::Ge),
    ("<", BinaryOp::Lt),
    ("<=", BinaryOp::Le),
    ("mod", BinaryOp::Mod),
    ("^", BinaryOp::Pow),
];

/// Unary operator words
pub static UNARY_WORDS: &[(&str, UnaryWord)] = &[
    ("abs", UnaryWord::Apply(UnaryOp::Abs)),
    ("acos", UnaryWord::Apply(UnaryOp::Acos)),
    ("alog", UnaryWord::Apply(UnaryOp::Exp10)),
    ("asin", UnaryWord::Apply(UnaryOp::Asin)),
    ("atan", UnaryWord::Apply(UnaryOp::Atan)),
    ("conj", UnaryWord::Apply(UnaryOp::Conj)),
    ("cos", UnaryWord::Apply(UnaryOp::Cos)),
    ("exp", UnaryWord::Apply(UnaryOp::Exp)),
    ("frac", UnaryWord::Apply(UnaryOp::Frac)),
    ("im", UnaryWord::Apply(UnaryOp::Im)),
    ("inv", UnaryWord::Apply(UnaryOp::Inv)),
    ("ln", UnaryWord::Apply(UnaryOp::Ln)),
    ("log", UnaryWord::Apply(UnaryOp::Log)),
    ("neg", UnaryWord::Apply(UnaryOp::Neg)),
    ("re", UnaryWord::Apply(UnaryOp::Re)),
    ("sgn", UnaryWord::Apply(UnaryOp::Sign)),
    ("sin", UnaryWord::Apply(UnaryOp::Sin)),
    ("sq", UnaryWord::Apply(UnaryOp::Sq)),
    ("sqrt", UnaryWord::Apply(UnaryOp::Sqrt)),
    ("tan", UnaryWord::Apply(UnaryOp::Tan)),
    (">BIN", UnaryWord::Convert(Kind::Binary)),
    (">CPX", UnaryWord::Convert(Kind::Complex)),
    (">FLT", UnaryWord::Convert(Kind::Float)),
    (">INT", UnaryWord::Convert(Kind::Integer)),
    (">LST", UnaryWord::Convert(Kind::List)),
    (">MAT", UnaryWord::Convert(Kind::Matrix)),
    (">RAT", UnaryWord::Convert(Kind::Rational)),
    (">STR", UnaryWord::Convert(Kind::String)),
];

/// Action words. `quit` is handled by the evaluation loop itself.
pub static ACTION_WORDS: &[(&str, Action)] = &[
    ("bin", actions::bin),
    ("clear", actions::clear),
    ("dec", actions::dec),
    ("deg", actions::deg),
    ("drop", actions::drop),
    ("dropn", actions::dropn),
    ("dup", actions::dup),
    ("dupn", actions::dupn),
    ("eng", actions::eng),
    ("eval", actions::eval),
    ("fix", actions::fix),
    ("grad", actions::grad),
    ("hex", actions::hex),
    ("info", actions::info),
    ("oct", actions::oct),
    ("polar", actions::polar),
    ("purge", actions::purge),
    ("rad", actions::rad),
    ("read", actions::read),
    ("rec", actions::rec),
    ("roll", actions::roll),
    ("rolld", actions::rolld),
    ("rot", actions::rot),
    ("run", actions::run),
    ("sci", actions::sci),
    ("sto", actions::sto),
    ("stws", actions::stws),
    ("swap", actions::swap),
    ("write", actions::write),
    ("sl", actions::sl),
    ("sr", actions::sr),
    ("exit", actions::quit_reminder),
    ("off", actions::quit_reminder),
];

/// A resolved builtin word
#[derive(Clone, Copy)]
pub enum Builtin {
    /// Binary operator
    Binary(BinaryOp),
    /// Unary operator
    Unary(UnaryWord),
    /// Action
    Action(Action),
}

impl std::fmt::Debug for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Builtin::Binary(op) => f.debug_tuple("Binary").field(op).finish(),
            Builtin::Unary(word) => f.debug_tuple("Unary").field(word).finish(),
            Builtin::Action(_) => f.write_str("Action"),
        }
    }
}

/// Lookup tables built from the word lists
pub struct Builtins {
    binary: HashMap<&'static str, BinaryOp>,
    unary: HashMap<&'static str, UnaryWord>,
    actions: HashMap<&'static str, Action>,
}

impl std::fmt::Debug for Builtins {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builtins")
            .field("binary", &self.binary.len())
            .field("unary", &self.unary.len())
            .field("actions", &self.actions.len())
            .finish()
    }
}

impl Builtins {
    /// Build the tables
    pub fn new() -> Self {
        Self {
            binary: BINARY_WORDS.iter().copied().collect(),
            unary: UNARY_WORDS.iter().copied().collect(),
            actions: ACTION_WORDS.iter().copied().collect(),
        }
    }

    /// Resolve `word`: binary table first, then unary, then actions
    pub fn lookup(&self, word: &str) -> Option<Builtin> {
        if let Some(op) = self.binary.get(word) {
            return Some(Builtin::Binary(*op));
        }
        if let Some(unary) = self.unary.get(word) {
            return Some(Builtin::Unary(*unary));
        }
        self.actions.get(word).map(|action| Builtin::Action(*action))
    }
}

impl Default for Builtins {
    fn default() -> Self {
        Self::new()
    }
}

/// Run a resolved builtin against the context
pub fn execute(ctx: &mut Context, builtin: Builtin) -> ClacResult<()> {
    match builtin {
        Builtin::Binary(op) => execute_binary(ctx, op),
        Builtin::Unary(word) => execute_unary(ctx, word),
        Builtin::Action(action) => action(ctx),
    }
}

/// Replace levels 1 and 0 with `level1 op level0`
pub fn execute_binary(ctx: &mut Context, op: BinaryOp) -> ClacResult<()> {
    let result = match (ctx.stack.get(1), ctx.stack.get(0)) {
        (Some(left), Some(right)) => apply_binary(op, left, right, &ctx.display)?,
        _ => return Err(ClacError::underflow()),
    };
    ctx.stack.pop();
    ctx.stack.put(result);
    Ok(())
}

/// Replace level 0 with the result of a unary word
pub fn execute_unary(ctx: &mut Context, word: UnaryWord) -> ClacResult<()> {
    let top = ctx.stack.get(0).ok_or_else(ClacError::underflow)?;
    let result = match word {
        UnaryWord::Apply(op) => top.apply_unary(op, &ctx.display)?,
        UnaryWord::Convert(kind) => top.convert(kind, &ctx.display)?,
    };
    ctx.stack.put(result);
    Ok(())
}
