//! Macros for phase timing and algorithm logging

/// Log a loading phase with elapsed time when `--verbose` is set
///
/// Usage:
/// ```ignore
/// trace_phase!(ctx, "read_input", edges = list.edges.len());
/// ```
macro_rules! trace_phase {
    ($ctx:expr, $phase:literal $(, $field:ident = $value:expr)* $(,)?) => {
        if $ctx.cli.verbose {
            let elapsed = $ctx.start.elapsed();
            ::tracing::debug!(?elapsed, $($field = $value,)* $phase);
        }
    };
}

/// Log a finished algorithm run with its elapsed time and start node
///
/// Usage:
/// ```ignore
/// trace_algorithm!(ctx, "dijkstra", source = source);
/// ```
macro_rules! trace_algorithm {
    ($ctx:expr, $algorithm:expr $(, $field:ident = $value:expr)* $(,)?) => {{
        let elapsed = $ctx.start.elapsed();
        let representation = &$ctx.config.representation;
        ::tracing::debug!(
            ?elapsed,
            algorithm = $algorithm,
            %representation,
            directed = $ctx.config.directed,
            $($field = $value,)*
            "algorithm complete"
        );
    }};
}

pub(crate) use trace_algorithm;
pub(crate) use trace_phase;
