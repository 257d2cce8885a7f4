use crate::interpreter::registry::core::{
    Arity, FunctionRegistry, binary_arguments, checked_real, unary_argument,
};

/// Defines the real preset tables.
///
/// Each entry maps a function name to an `f64` function. Results are checked
/// after the call: a finite argument list producing a NaN or infinite result
/// is a domain error.
macro_rules! real_functions {
    (
        unary:  { $($uname:literal => $ufunc:expr),* $(,)? }
        binary: { $($bname:literal => $bfunc:expr),* $(,)? }
    ) => {
        /// Names and bodies of the single-argument real functions.
        pub const UNARY_FUNCTIONS: &[(&str, fn(f64) -> f64)] = &[
            $(($uname, $ufunc),)*
        ];
        /// Names and bodies of the two-argument real functions.
        pub const BINARY_FUNCTIONS: &[(&str, fn(f64, f64) -> f64)] = &[
            $(($bname, $bfunc),)*
        ];
    };
}

real_functions! {
    unary: {
        "exp"   => f64::exp,
        "expm1" => f64::exp_m1,
        "log"   => f64::ln,
        "log1p" => f64::ln_1p,
        "log2"  => f64::log2,
        "log10" => f64::log10,
        "sqrt"  => f64::sqrt,
        "asin"  => f64::asin,
        "acos"  => f64::acos,
        "atan"  => f64::atan,
        "sin"   => f64::sin,
        "cos"   => f64::cos,
        "tan"   => f64::tan,
        "sinh"  => f64::sinh,
        "cosh"  => f64::cosh,
        "tanh"  => f64::tanh,
        "fabs"  => f64::abs,
        "floor" => f64::floor,
        "ceil"  => f64::ceil,
    }
    binary: {
        "pow"   => f64::powf,
        "atan2" => f64::atan2,
        "log"   => log_base,
    }
}

/// Logarithm of `x` to an arbitrary `base`.
fn log_base(x: f64, base: f64) -> f64 {
    x.ln() / base.ln()
}

/// Registers the real preset.
///
/// Complex arguments are rejected with a domain error.
pub(crate) fn install(registry: &mut FunctionRegistry) {
    for &(name, func) in UNARY_FUNCTIONS {
        registry.register(name, Arity::Unary, move |args| {
                    let x = unary_argument(name, args)?.as_real()?;
                    checked_real(name, &[x], func(x))
                });
    }
    for &(name, func) in BINARY_FUNCTIONS {
        registry.register(name, Arity::Binary, move |args| {
                    let (x, y) = binary_arguments(name, args)?;
                    let (x, y) = (x.as_real()?, y.as_real()?);
                    checked_real(name, &[x, y], func(x, y))
                });
    }
}
