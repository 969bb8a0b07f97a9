//! Optional instrumentation.
//!
//! With the `tracing` feature every operation forwarded to a cursor emits a
//! `TRACE` event carrying the operation name and the cursor type. Without
//! it, `trace_op!` expands to an empty block.

macro_rules! trace_op {
    ($op:literal, $cursor:ty $(, $field:ident = $value:expr)* $(,)?) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!(
                op = $op,
                cursor = ::core::any::type_name::<$cursor>()
                $(, $field = ?$value)*
            );
        }
    }};
}

pub(crate) use trace_op;
