//! Action words
//!
//! Actions mutate the context directly: stack manipulation, display modes,
//! script inclusion, variables and persistence. Every action checks its
//! arguments before popping anything, so a failing action leaves the stack as
//! it found it.

use std::path::Path;

use core_types::{
    AngleMode, Base, ClacError, ClacResult, ComplexMode, DisplayState, FloatMode, Kind, UnaryOp,
    Value,
};
use num_traits::{Signed, ToPrimitive};

use crate::context::Context;
use crate::persist;
use crate::source::{FileSource, LineSource, WordSource};
use crate::stack::OperandStack;

/// Signature shared by every action
pub type Action = fn(&mut Context) -> ClacResult<()>;

/// Largest decimal count accepted by `fix`, `sci` and `eng`
pub const MAX_DECIMALS: usize = 20;

/// Value at `level`, or an error naming how many levels were needed
fn require(ctx: &Context, level: usize) -> ClacResult<&Value> {
    ctx.stack.get(level).ok_or_else(|| {
        if ctx.stack.is_empty() {
            ClacError::underflow()
        } else {
            ClacError::insufficient_height(level + 1, ctx.stack.height())
        }
    })
}

/// Count argument at level 0, without popping it
fn peek_count(ctx: &Context) -> ClacResult<usize> {
    let top = require(ctx, 0)?;
    let n = match top.convert(Kind::Integer, &ctx.display) {
        Ok(Value::Integer(n)) => n,
        _ => return Err(ClacError::type_mismatch("Integer", top.kind())),
    };
    if n.is_negative() {
        return Err(ClacError::domain("Count must not be negative"));
    }
    n.to_usize()
        .ok_or_else(|| ClacError::domain("Count too large"))
}

/// String argument at `level`, without popping it
fn peek_string(ctx: &Context, level: usize) -> ClacResult<String> {
    let value = require(ctx, level)?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ClacError::type_mismatch("String", value.kind()))
}

/// Pop a value the caller has already validated
fn discard(ctx: &mut Context) {
    let _ = ctx.stack.pop();
}

fn set_base(ctx: &mut Context, base: Base) -> ClacResult<()> {
    ctx.display.base = base;
    Ok(())
}

fn set_angle(ctx: &mut Context, mode: AngleMode) -> ClacResult<()> {
    ctx.display.angle_mode = mode;
    Ok(())
}

fn set_complex(ctx: &mut Context, mode: ComplexMode) -> ClacResult<()> {
    ctx.display.complex_mode = mode;
    Ok(())
}

fn set_float(ctx: &mut Context, mode: FloatMode) -> ClacResult<()> {
    let decimals = peek_count(ctx)?;
    if decimals > MAX_DECIMALS {
        return Err(ClacError::domain(format!(
            "At most {} decimals can be shown",
            MAX_DECIMALS
        )));
    }
    discard(ctx);
    ctx.display.set_float_mode(mode, decimals);
    Ok(())
}

/// `bin`
pub fn bin(ctx: &mut Context) -> ClacResult<()> {
    set_base(ctx, Base::Binary)
}

/// `dec`
pub fn dec(ctx: &mut Context) -> ClacResult<()> {
    set_base(ctx, Base::Decimal)
}

/// `hex`
pub fn hex(ctx: &mut Context) -> ClacResult<()> {
    set_base(ctx, Base::Hex)
}

/// `oct`
pub fn oct(ctx: &mut Context) -> ClacResult<()> {
    set_base(ctx, Base::Octal)
}

/// `deg`
pub fn deg(ctx: &mut Context) -> ClacResult<()> {
    set_angle(ctx, AngleMode::Degree)
}

/// `grad`
pub fn grad(ctx: &mut Context) -> ClacResult<()> {
    set_angle(ctx, AngleMode::Gradian)
}

/// `rad`
pub fn rad(ctx: &mut Context) -> ClacResult<()> {
    set_angle(ctx, AngleMode::Radian)
}

/// `polar`
pub fn polar(ctx: &mut Context) -> ClacResult<()> {
    set_complex(ctx, ComplexMode::Polar)
}

/// `rec`
pub fn rec(ctx: &mut Context) -> ClacResult<()> {
    set_complex(ctx, ComplexMode::Rectangular)
}

/// `fix`: fixed notation with the decimal count at level 0
pub fn fix(ctx: &mut Context) -> ClacResult<()> {
    set_float(ctx, FloatMode::Fixed)
}

/// `sci`: scientific notation with the decimal count at level 0
pub fn sci(ctx: &mut Context) -> ClacResult<()> {
    set_float(ctx, FloatMode::Scientific)
}

/// `eng`: engineering notation with the decimal count at level 0
pub fn eng(ctx: &mut Context) -> ClacResult<()> {
    set_float(ctx, FloatMode::Engineering)
}

/// `stws`: set the binary word size from level 0
pub fn stws(ctx: &mut Context) -> ClacResult<()> {
    let bits = peek_count(ctx)?;
    let max = DisplayState::MAX_WORD_SIZE as usize;
    if !(1..=max).contains(&bits) {
        return Err(ClacError::domain(format!(
            "Word size must be between 1 and {} bits",
            max
        )));
    }
    discard(ctx);
    // Bounded by MAX_WORD_SIZE above.
    ctx.display.word_size = bits as u32;
    Ok(())
}

/// `clear`
pub fn clear(ctx: &mut Context) -> ClacResult<()> {
    ctx.stack.clear();
    Ok(())
}

/// `drop`
pub fn drop(ctx: &mut Context) -> ClacResult<()> {
    ctx.stack.drop()
}

/// `dropn`: drop the count and that many more values
pub fn dropn(ctx: &mut Context) -> ClacResult<()> {
    let count = peek_count(ctx)?;
    let available = ctx.stack.height() - 1;
    if count > available {
        return Err(ClacError::insufficient_height(count, available));
    }
    for _ in 0..=count {
        discard(ctx);
    }
    Ok(())
}

/// `dup`
pub fn dup(ctx: &mut Context) -> ClacResult<()> {
    let copy = require(ctx, 0)?.duplicate();
    ctx.stack.push(copy);
    Ok(())
}

/// `dupn`: copy the top `n` values, keeping their order
pub fn dupn(ctx: &mut Context) -> ClacResult<()> {
    let count = peek_count(ctx)?;
    let available = ctx.stack.height() - 1;
    if count > available {
        return Err(ClacError::insufficient_height(count, available));
    }
    discard(ctx);
    for _ in 0..count {
        let copy = require(ctx, count - 1)?.duplicate();
        ctx.stack.push(copy);
    }
    Ok(())
}

/// `swap`
pub fn swap(ctx: &mut Context) -> ClacResult<()> {
    ctx.stack.swap()
}

/// `rot`
pub fn rot(ctx: &mut Context) -> ClacResult<()> {
    ctx.stack.rotate()
}

fn roll_with(
    ctx: &mut Context,
    roll: fn(&mut OperandStack, usize) -> ClacResult<()>,
) -> ClacResult<()> {
    let count = peek_count(ctx)?.max(1);
    let available = ctx.stack.height() - 1;
    if count > available {
        return Err(ClacError::insufficient_height(count, available));
    }
    discard(ctx);
    roll(&mut ctx.stack, count)
}

/// `roll`: bring level `n - 1` (below the count) to the top
pub fn roll(ctx: &mut Context) -> ClacResult<()> {
    roll_with(ctx, OperandStack::roll_up)
}

/// `rolld`: send the top (below the count) down to level `n - 1`
pub fn rolld(ctx: &mut Context) -> ClacResult<()> {
    roll_with(ctx, OperandStack::roll_down)
}

/// `eval`: include a script file named by a String, or run a Program
pub fn eval(ctx: &mut Context) -> ClacResult<()> {
    let source: Box<dyn WordSource> = match require(ctx, 0)? {
        Value::String(name) => {
            tracing::debug!(file = %name, "including script");
            Box::new(FileSource::open(name)?)
        }
        Value::Program(text) => Box::new(LineSource::new(text)),
        other => return Err(ClacError::type_mismatch("String", other.kind())),
    };
    discard(ctx);
    ctx.sources.push(source);
    Ok(())
}

/// `run`, the same as `eval`
pub fn run(ctx: &mut Context) -> ClacResult<()> {
    eval(ctx)
}

/// `info`: version banner
pub fn info(ctx: &mut Context) -> ClacResult<()> {
    ctx.info(format!(
        "Clac version {}, an RPN calculator",
        env!("CARGO_PKG_VERSION")
    ));
    Ok(())
}

/// `exit` and `off`
pub fn quit_reminder(ctx: &mut Context) -> ClacResult<()> {
    ctx.info("Use 'quit' to terminate Clac");
    Ok(())
}

/// `sto`: `value "name" sto` stores a variable
pub fn sto(ctx: &mut Context) -> ClacResult<()> {
    let name = peek_string(ctx, 0)?;
    require(ctx, 1)?;
    discard(ctx);
    if let Some(value) = ctx.stack.pop() {
        tracing::debug!(name = %name, kind = %value.kind(), "variable stored");
        ctx.variables.insert(name, value);
    }
    Ok(())
}

/// `purge`: `"name" purge` removes a variable
pub fn purge(ctx: &mut Context) -> ClacResult<()> {
    let name = peek_string(ctx, 0)?;
    discard(ctx);
    if ctx.variables.remove(&name).is_none() {
        tracing::debug!(name = %name, "purge of unknown variable");
    }
    Ok(())
}

/// `write`: `value "file" write` persists the value and keeps it
pub fn write(ctx: &mut Context) -> ClacResult<()> {
    let name = peek_string(ctx, 0)?;
    persist::write_object(Path::new(&name), require(ctx, 1)?)?;
    discard(ctx);
    Ok(())
}

/// `read`: `"file" read` replaces the name with the stored value
pub fn read(ctx: &mut Context) -> ClacResult<()> {
    let name = peek_string(ctx, 0)?;
    let value = persist::read_object(Path::new(&name))?;
    ctx.stack.put(value);
    Ok(())
}

fn shift(ctx: &mut Context, op: UnaryOp) -> ClacResult<()> {
    let top = require(ctx, 0)?;
    if top.kind() != Kind::Binary {
        return Err(ClacError::type_mismatch("Binary", top.kind()));
    }
    let shifted = top.apply_unary(op, &ctx.display)?;
    ctx.stack.put(shifted);
    Ok(())
}

/// `sl`: shift the binary word at level 0 one bit left
pub fn sl(ctx: &mut Context) -> ClacResult<()> {
    shift(ctx, UnaryOp::ShiftLeft)
}

/// `sr`: shift the binary word at level 0 one bit right
pub fn sr(ctx: &mut Context) -> ClacResult<()> {
    shift(ctx, UnaryOp::ShiftRight)
}
