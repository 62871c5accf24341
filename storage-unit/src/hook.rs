//! Typed decode hooks for structure decoders working over untyped
//! document values.
//!
//! A hook is offered each raw value before the decoder applies its own
//! conversion. It either decodes the value into its `Target` or hands it
//! back untouched so the next hook, or the decoder's default, can try.
//! Which hook runs for which field is fixed by `Target` at compile time.

use std::marker::PhantomData;

use serde_json::Value;

use crate::{
    bits::BitScale,
    bytes::ByteScale,
    error::Error,
    scale::{Scale, Unit},
};

/// Kind of a raw document value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Hooked<T> {
    Decoded(T),
    /// The hook does not apply; carries the input unchanged.
    Deferred(Value),
}

pub trait DecodeHook {
    type Target;

    fn decode(&self, from: Kind, data: Value) -> Result<Hooked<Self::Target>, Error>;
}

/// Parses string values into a [`Unit`] and defers everything else.
pub struct StringToUnitHook<S>(PhantomData<S>);

impl<S> StringToUnitHook<S> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<S> Default for StringToUnitHook<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> DecodeHook for StringToUnitHook<S>
where
    S: Scale,
{
    type Target = Unit<S>;

    fn decode(&self, from: Kind, data: Value) -> Result<Hooked<Self::Target>, Error> {
        match (from, data) {
            (Kind::String, Value::String(s)) => Unit::parse(&s).map(Hooked::Decoded),
            (_, data) => Ok(Hooked::Deferred(data)),
        }
    }
}

pub const fn string_to_bits_hook() -> StringToUnitHook<BitScale> {
    StringToUnitHook::new()
}

pub const fn string_to_bytes_hook() -> StringToUnitHook<ByteScale> {
    StringToUnitHook::new()
}

/// Hooks for one target type, tried in the order they were added.
pub struct HookChain<T> {
    hooks: Vec<Box<dyn DecodeHook<Target = T>>>,
}

impl<T> Default for HookChain<T> {
    fn default() -> Self {
        Self { hooks: Vec::new() }
    }
}

impl<T> HookChain<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<H>(mut self, hook: H) -> Self
    where
        H: DecodeHook<Target = T> + 'static,
    {
        self.push(hook);
        self
    }

    pub fn push<H>(&mut self, hook: H)
    where
        H: DecodeHook<Target = T> + 'static,
    {
        self.hooks.push(Box::new(hook));
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Runs the hooks until one decodes `data`. The first error stops the
    /// chain.
    pub fn decode(&self, mut data: Value) -> Result<Hooked<T>, Error> {
        for hook in &self.hooks {
            match hook.decode(Kind::of(&data), data)? {
                Hooked::Decoded(value) => return Ok(Hooked::Decoded(value)),
                Hooked::Deferred(deferred) => data = deferred,
            }
        }

        Ok(Hooked::Deferred(data))
    }
}
