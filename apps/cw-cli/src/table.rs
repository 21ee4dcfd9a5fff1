//! Plain-text rendering of scenario results.

use cw_pipe::{IterationComparison, ScenarioResult};
use cw_solver::Iterations;

pub fn header() -> String {
    format!(
        "{:38}  {:>6}  {:>8}  {:>9}  {:>7}  {:>11}  {:>10}  {:>12}  {:>10}  {:>14}",
        "Case",
        "D [m]",
        "eps [mm]",
        "K=eps/D",
        "V [m/s]",
        "rho [kg/m3]",
        "mu [mPa·s]",
        "R [-]",
        "f [-]",
        "dp/dx [Pa/m]"
    )
}

pub fn row(result: &ScenarioResult) -> String {
    let sc = &result.scenario;
    format!(
        "{:38}  {:6.3}  {:8.3}  {:9.5}  {:7.3}  {:11.1}  {:10.3}  {:12.0}  {:10.5}  {:14.1}",
        sc.name,
        sc.diameter.value,
        sc.roughness.value * 1e3,
        result.relative_roughness,
        sc.velocity.value,
        sc.fluid.density.value,
        sc.fluid.viscosity.value * 1e3,
        result.reynolds,
        result.friction_factor,
        result.pressure_gradient
    )
}

pub fn render(results: &[ScenarioResult], iters: Iterations) -> String {
    let header = header();
    let mut out = format!("\nClamond Colebrook solver — iterations = {iters}\n\n");
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(header.chars().count()));
    out.push('\n');
    for result in results {
        out.push_str(&row(result));
        out.push('\n');
    }
    out
}

pub fn render_comparison(cmp: &IterationComparison) -> String {
    let line = |s: &cw_pipe::IterationSample| {
        format!(
            "  f(iters={}) = {:.8},  dp/dx = {:.2} Pa/m\n",
            s.iters, s.friction_factor, s.pressure_gradient
        )
    };
    format!(
        "\nIteration sensitivity (iters={} vs iters={}):\n  R = {:.0}, K = {:.5}\n{}{}  Relative difference in f: {:.3e}\n",
        cmp.coarse.iters,
        cmp.fine.iters,
        cmp.reynolds,
        cmp.relative_roughness,
        line(&cmp.coarse),
        line(&cmp.fine),
        cmp.relative_difference
    )
}
