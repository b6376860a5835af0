//! Operator forwarding.
//!
//! Three families, with different validation behaviour:
//!
//! - Compound assignment (`+=`, `<<=`, ...) and increment/decrement compute
//!   the next value with `T`'s own operator and route it through
//!   [`Entity::set`]. The operator forms discard the outcome; use
//!   [`Entity::update`] or the boolean-returning `increment`/`decrement` when
//!   rejection must be observed.
//! - Binary (`+`, `<<`, ...) and unary (`!`, `-`) operators return a new,
//!   unvalidated `Entity` with an accept-all validator.
//! - Comparisons and the logical helpers return plain values.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use crate::entity::Entity;

/// Element types with a unit step, used by increment and decrement.
pub trait Step {
    fn one() -> Self;
}

macro_rules! impl_step {
    ($one:expr => $($t:ty),*) => {
        $(impl Step for $t {
            fn one() -> Self {
                $one
            }
        })*
    };
}

impl_step!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_step!(1.0 => f32, f64);

/// Truthiness of an element type, used by the logical helpers.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_nonzero {
    ($zero:expr => $($t:ty),*) => {
        $(impl Truthy for $t {
            fn is_truthy(&self) -> bool {
                *self != $zero
            }
        })*
    };
}

impl_truthy_nonzero!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_truthy_nonzero!(0.0 => f32, f64);
impl_truthy_nonzero!('\0' => char);

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<U> Truthy for Vec<U> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<U> Truthy for Option<U> {
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

// ── Compound assignment ─────────────────────────────────────────────────

macro_rules! compound_assign {
    ($($assign:ident :: $assign_fn:ident => $op:ident :: $op_fn:ident, $sym:literal;)*) => {
        $(impl<T> $assign<T> for Entity<T>
        where
            T: $op<Output = T> + Clone,
        {
            fn $assign_fn(&mut self, rhs: T) {
                self.trace($sym);
                let next = self.value.clone().$op_fn(rhs);
                self.set(next);
            }
        })*
    };
}

compound_assign! {
    AddAssign::add_assign => Add::add, "+=";
    SubAssign::sub_assign => Sub::sub, "-=";
    MulAssign::mul_assign => Mul::mul, "*=";
    DivAssign::div_assign => Div::div, "/=";
    RemAssign::rem_assign => Rem::rem, "%=";
    BitAndAssign::bitand_assign => BitAnd::bitand, "&=";
    BitOrAssign::bitor_assign => BitOr::bitor, "|=";
    BitXorAssign::bitxor_assign => BitXor::bitxor, "^=";
    ShlAssign::shl_assign => Shl::shl, "<<=";
    ShrAssign::shr_assign => Shr::shr, ">>=";
}

// ── Increment / decrement ───────────────────────────────────────────────

impl<T> Entity<T>
where
    T: Step + Clone,
{
    /// Prefix increment: route `current + 1` through the validated set.
    pub fn increment(&mut self) -> bool
    where
        T: Add<Output = T>,
    {
        self.trace("++");
        let next = self.value.clone() + T::one();
        self.set(next)
    }

    /// Prefix decrement: route `current - 1` through the validated set.
    pub fn decrement(&mut self) -> bool
    where
        T: Sub<Output = T>,
    {
        self.trace("--");
        let next = self.value.clone() - T::one();
        self.set(next)
    }

    /// Postfix increment: returns a snapshot taken before the step.
    pub fn post_increment(&mut self) -> Self
    where
        T: Add<Output = T>,
    {
        let before = self.clone();
        self.increment();
        before
    }

    /// Postfix decrement: returns a snapshot taken before the step.
    pub fn post_decrement(&mut self) -> Self
    where
        T: Sub<Output = T>,
    {
        let before = self.clone();
        self.decrement();
        before
    }
}

// ── Binary operators ────────────────────────────────────────────────────

macro_rules! binary_op {
    ($($op:ident :: $op_fn:ident, $sym:literal;)*) => {
        $(impl<T> $op<T> for Entity<T>
        where
            T: $op<Output = T> + Clone,
        {
            type Output = Entity<T>;

            fn $op_fn(self, rhs: T) -> Entity<T> {
                self.trace($sym);
                let config = self.config;
                Entity::with_config(self.value.$op_fn(rhs), config)
            }
        }

        impl<T> $op<T> for &Entity<T>
        where
            T: $op<Output = T> + Clone,
        {
            type Output = Entity<T>;

            fn $op_fn(self, rhs: T) -> Entity<T> {
                self.trace($sym);
                self.derive(self.value.clone().$op_fn(rhs))
            }
        })*
    };
}

binary_op! {
    Add::add, "+";
    Sub::sub, "-";
    Mul::mul, "*";
    Div::div, "/";
    Rem::rem, "%";
    BitAnd::bitand, "&";
    BitOr::bitor, "|";
    BitXor::bitxor, "^";
    Shl::shl, "<<";
    Shr::shr, ">>";
}

// ── Unary operators ─────────────────────────────────────────────────────

macro_rules! unary_op {
    ($($op:ident :: $op_fn:ident, $sym:literal;)*) => {
        $(impl<T> $op for Entity<T>
        where
            T: $op<Output = T> + Clone,
        {
            type Output = Entity<T>;

            fn $op_fn(self) -> Entity<T> {
                self.trace($sym);
                let config = self.config;
                Entity::with_config(self.value.$op_fn(), config)
            }
        }

        impl<T> $op for &Entity<T>
        where
            T: $op<Output = T> + Clone,
        {
            type Output = Entity<T>;

            fn $op_fn(self) -> Entity<T> {
                self.trace($sym);
                self.derive(self.value.clone().$op_fn())
            }
        })*
    };
}

unary_op! {
    Not::not, "~";
    Neg::neg, "neg";
}

// ── Logical helpers ─────────────────────────────────────────────────────

impl<T: Truthy> Entity<T> {
    /// Logical negation of the committed value's truthiness.
    pub fn logical_not(&self) -> bool {
        self.trace("!");
        !self.value.is_truthy()
    }

    pub fn logical_and(&self, other: &Entity<T>) -> bool {
        self.trace("&&");
        self.value.is_truthy() && other.value.is_truthy()
    }

    pub fn logical_or(&self, other: &Entity<T>) -> bool {
        self.trace("||");
        self.value.is_truthy() || other.value.is_truthy()
    }
}

// ── Comparisons ─────────────────────────────────────────────────────────

impl<T: PartialEq> PartialEq for Entity<T> {
    fn eq(&self, other: &Self) -> bool {
        self.trace("==");
        self.value == other.value
    }

    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, other: &Self) -> bool {
        self.trace("!=");
        self.value != other.value
    }
}

impl<T: Eq> Eq for Entity<T> {}

impl<T: PartialEq> PartialEq<T> for Entity<T> {
    fn eq(&self, other: &T) -> bool {
        self.trace("==");
        self.value == *other
    }
}

impl<T: PartialOrd> PartialOrd for Entity<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.trace("<=>");
        self.value.partial_cmp(&other.value)
    }

    fn lt(&self, other: &Self) -> bool {
        self.trace("<");
        self.value < other.value
    }

    fn le(&self, other: &Self) -> bool {
        self.trace("<=");
        self.value <= other.value
    }

    fn gt(&self, other: &Self) -> bool {
        self.trace(">");
        self.value > other.value
    }

    fn ge(&self, other: &Self) -> bool {
        self.trace(">=");
        self.value >= other.value
    }
}

impl<T: PartialOrd> PartialOrd<T> for Entity<T> {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        self.trace("<=>");
        self.value.partial_cmp(other)
    }
}

impl<T: Ord> Ord for Entity<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.trace("<=>");
        self.value.cmp(&other.value)
    }
}

impl<T: Hash> Hash for Entity<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}
