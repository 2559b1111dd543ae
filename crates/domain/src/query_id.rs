/// Source of 16-bit transaction IDs for new queries.
pub trait QueryIdGenerator {
    fn next_id(&self) -> u16;
}

/// Uniformly random IDs, the default for queries sent in the clear.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomQueryId;

impl QueryIdGenerator for RandomQueryId {
    fn next_id(&self) -> u16 {
        fastrand::u16(..)
    }
}

/// Always yields the same ID. Used for deterministic output and for
/// transports where the ID must be zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedQueryId(pub u16);

impl QueryIdGenerator for FixedQueryId {
    fn next_id(&self) -> u16 {
        self.0
    }
}

impl<F> QueryIdGenerator for F
where
    F: Fn() -> u16,
{
    fn next_id(&self) -> u16 {
        self()
    }
}
