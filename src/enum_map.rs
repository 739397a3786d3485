use std::{
    array,
    ops::{Index, IndexMut},
};

pub trait SimpleEnum: Copy + Sized {
    /// Backing storage for an `EnumMap` keyed by this enum.
    ///
    /// For an enum with two variants it is:
    ///
    /// ```
    /// type Array<V> = [V; 2];
    /// ```
    type Array<V>: Array<Element = V>;

    /// Inverse of `index`. Panics when out of range.
    fn from_index(index: usize) -> Self;

    /// Unique identifier within `0..COUNT`.
    fn index(self) -> usize;
}

/// SAFETY: `unsafe_simple_enum!(Type, length)` requires that `Type` is a `#[repr(u8)]` enum
/// without data whose discriminants are exactly `0..length`.
#[macro_export]
macro_rules! unsafe_simple_enum {
    {$name:ty, $n:literal} => {
        impl $crate::enum_map::SimpleEnum for $name {
            type Array<V> = [V; $n];

            fn from_index(index: usize) -> Self {
                assert!(index < $n, "{} index out of range: {index}", stringify!($name));
                unsafe { std::mem::transmute(index as u8) }
            }

            fn index(self) -> usize {
                self as usize
            }
        }
    };
}

pub trait SimpleEnumExt: SimpleEnum {
    const COUNT: usize = Self::Array::<()>::LENGTH;

    fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).map(Self::from_index)
    }
}

impl<T: SimpleEnum> SimpleEnumExt for T {}

pub use unsafe_simple_enum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct EnumMap<K: SimpleEnum, V> {
    array: K::Array<V>,
}

impl<K: SimpleEnum, V> EnumMap<K, V> {
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(K) -> V,
    {
        let array = Array::from_fn(|i| f(K::from_index(i)));
        EnumMap { array }
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &V)> {
        self.array
            .as_slice()
            .iter()
            .enumerate()
            .map(|(i, v)| (K::from_index(i), v))
    }
}

impl<K: SimpleEnum, V> Index<K> for EnumMap<K, V> {
    type Output = V;

    fn index(&self, key: K) -> &V {
        &self.array.as_slice()[key.index()]
    }
}

impl<K: SimpleEnum, V> IndexMut<K> for EnumMap<K, V> {
    fn index_mut(&mut self, key: K) -> &mut V {
        &mut self.array.as_mut_slice()[key.index()]
    }
}

pub trait Array {
    type Element;
    const LENGTH: usize;

    fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> Self::Element;

    fn as_slice(&self) -> &[Self::Element];
    fn as_mut_slice(&mut self) -> &mut [Self::Element];
}

impl<V, const N: usize> Array for [V; N] {
    type Element = V;
    const LENGTH: usize = N;

    fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> Self::Element,
    {
        array::from_fn(f)
    }

    fn as_slice(&self) -> &[Self::Element] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [Self::Element] {
        self
    }
}
