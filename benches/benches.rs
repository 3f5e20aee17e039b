//! benches.rs
use criterion::{criterion_group, criterion_main, Criterion};
use expressions::{evaluate, tokenize, Builder};
use paste::paste;

fn bench_analyze_liner(c: &mut Criterion) {
    let make_much_operand = |n: usize| (0..=n).map(|_| "1").collect::<Vec<_>>().join("+");
    for n in [1, 10, 100, 1000] {
        let formula = make_much_operand(n);
        c.bench_function(&format!("tokenize {} operands", n), |b| {
            b.iter(|| tokenize(&formula))
        });
        c.bench_function(&format!("evaluate {} operands", n), |b| {
            b.iter(|| evaluate(&formula))
        });
    }
}

fn bench_analyze_nested(c: &mut Criterion) {
    let make_much_nested = |n: usize| {
        let mut formula = "1".to_string();
        for _ in 0..n {
            formula = format!("sin({})", formula);
        }
        formula
    };
    for n in [1, 10, 100, 1000] {
        let formula = make_much_nested(n);
        c.bench_function(&format!("evaluate {} nested", n), |b| {
            b.iter(|| evaluate(&formula))
        });
    }
}

fn bench_analyze_negation(c: &mut Criterion) {
    let make_much_negated = |n: usize| (0..=n).map(|_| "-(-1)").collect::<Vec<_>>().join("*");
    for n in [1, 10, 100] {
        let formula = make_much_negated(n);
        c.bench_function(&format!("evaluate {} negations", n), |b| {
            b.iter(|| evaluate(&formula))
        });
    }
}

fn bench_analyze_literal(c: &mut Criterion) {
    let make_much_order = |n: usize| {
        let digits = "0123456789";
        digits.repeat((n + 9) / 10)[..n].to_string()
    };
    for n in [1, 10, 100, 1000] {
        let formula = make_much_order(n);
        c.bench_function(&format!("evaluate {} order literal", n), |b| {
            b.iter(|| evaluate(&formula))
        });
    }
}

fn bench_analyze_invalid(c: &mut Criterion) {
    let invalid_formulas = [
        "unknown_func(1)",      // unknown symbol
        "1 + (2 * 3",           // forget ')'
        "2 ** 2",               // operator without operand
        "171!",                 // factorial out of range
    ];

    for formula in &invalid_formulas {
        c.bench_function(&format!("evaluate invalid: {}", formula), |b| {
            b.iter(|| evaluate(formula))
        });
    }
}

criterion_group!(bench_analyze,
    bench_analyze_liner,
    bench_analyze_nested,
    bench_analyze_negation,
    bench_analyze_literal,
    bench_analyze_invalid,
);

fn bench_practical_polynomial(c: &mut Criterion) {
    let formula = "1.5 + 2*0.3 - 0.25*0.3^2 + 4*0.3^3 - 0.3^4";
    c.bench_function(&format!("evaluate polynomial '{}'", formula), |b| {
        b.iter(|| evaluate(formula))
    });
}

fn bench_practical_wave_function(c: &mut Criterion) {
    let formula = "5.25*sin(0.25*0.3 + 1.5) - 0.03*cos(0.25*0.3 + 1.5)";
    c.bench_function(&format!("evaluate wave function '{}'", formula), |b| {
        b.iter(|| evaluate(formula))
    });
}

fn bench_practical_gamma(c: &mut Criterion) {
    let formula = "0.5! + 2.5! - 170!/169!";
    c.bench_function(&format!("evaluate factorials '{}'", formula), |b| {
        b.iter(|| evaluate(formula))
    });
}

fn bench_practical_lenient(c: &mut Criterion) {
    let formula = "2 * (3 + (4 - 1";
    let builder = Builder::new(formula).allow_unclosed_parens(true);
    c.bench_function(&format!("evaluate lenient '{}'", formula), |b| {
        b.iter(|| builder.evaluate())
    });
}

criterion_group!(bench_practical,
    bench_practical_polynomial,
    bench_practical_wave_function,
    bench_practical_gamma,
    bench_practical_lenient,
);

macro_rules! compares_one_arity_functions {
    ($( $variant: ident => $method: ident ),* $(,)? ) => {
        paste! {
            $(
                pub fn [<bench_compares_ $variant>](c: &mut Criterion) {
                    let x = 0.5f64;

                    c.bench_function(concat!("direct ", stringify!($method), "(x)"), |b| {
                        b.iter(|| x.$method())
                    });

                    c.bench_function(concat!("parsed \"", stringify!($variant), "(0.5)\""), |b| {
                        b.iter(|| evaluate(concat!(stringify!($variant), "(0.5)")))
                    });
                }
            )*
        }
    };
}

compares_one_arity_functions! {
    sin => sin,     cos => cos,     tan => tan,
    asin => asin,   acos => acos,   atan => atan,
    sinh => sinh,   cosh => cosh,   tanh => tanh,
    exp => exp,     ln => ln,       log => log10,
    sqrt => sqrt,   floor => floor, ceiling => ceil,
}

pub fn bench_compares_max(c: &mut Criterion) {
    let x = 0.5f64;
    let y = 2.0f64;

    c.bench_function("direct x.max(y)", |b| {
        b.iter(|| x.max(y))
    });

    c.bench_function(r#"parsed "max(0.5, 2)""#, |b| {
        b.iter(|| evaluate("max(0.5, 2)"))
    });
}

criterion_group!(bench_compare,
    bench_compares_sin,     bench_compares_cos,     bench_compares_tan,
    bench_compares_asin,    bench_compares_acos,    bench_compares_atan,
    bench_compares_sinh,    bench_compares_cosh,    bench_compares_tanh,
    bench_compares_exp,     bench_compares_ln,      bench_compares_log,
    bench_compares_sqrt,    bench_compares_floor,   bench_compares_ceiling,

    bench_compares_max,
);

criterion_main!{
    bench_analyze,
    bench_practical,
    bench_compare,
}
