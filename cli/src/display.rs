use buspath_core::ComparisonRow;

use crate::colors::ColorScheme;
use crate::search::{RouteOutcome, SearchRequest};

const EXPLORATION_PREVIEW: usize = 10;

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    println!(
        "🚌 Finding route from {} to {}",
        colors.stop_name(&format!("\"{}\"", request.from)),
        colors.stop_name(&format!("\"{}\"", request.to))
    );
    println!("⚙️  Using {} search", request.algorithm.label());
    println!("🔍 Searching...");
}

pub fn display_route_outcome(outcome: &RouteOutcome, colors: &ColorScheme) {
    let options = &outcome.display_options;

    if !outcome.result.found() {
        println!(
            "{} {} and {}",
            colors.error("❌ No route found between"),
            colors.stop_name(&format!("\"{}\"", outcome.from)),
            colors.stop_name(&format!("\"{}\"", outcome.to))
        );
        if options.verbose {
            display_exploration_analysis(outcome, colors);
        }
        return;
    }

    // Route flow first; quiet mode stops here.
    let flow = outcome
        .result
        .path
        .iter()
        .map(|stop| colors.stop_name(stop).to_string())
        .collect::<Vec<_>>()
        .join(" → ");
    println!("{}", flow);

    if options.quiet {
        return;
    }

    println!(
        "\n{} Route found using {} ({} transfers)",
        colors.success("✅"),
        outcome.algorithm.label(),
        colors.number(&outcome.result.path.len().saturating_sub(2).to_string())
    );
    println!(
        "⏱️  {} min | 📏 {} km | 💵 Rs. {}",
        colors.number(&outcome.stats.total_time.to_string()),
        colors.number(&format!("{:.1}", outcome.stats.total_distance)),
        colors.number(&outcome.stats.total_fare.to_string())
    );

    println!();
    for (step, segment) in outcome.stats.segments.iter().enumerate() {
        println!(
            "{} Bus {}: {} → {} ({} min, {} km, Rs. {})",
            colors.step_number(&format!("{:2}.", step + 1)),
            colors.line_number(&segment.line),
            segment.from,
            segment.to,
            segment.time,
            segment.distance,
            segment.fare
        );
    }

    if options.verbose {
        display_exploration_analysis(outcome, colors);
    }
}

fn display_exploration_analysis(outcome: &RouteOutcome, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} explored {} stops in {:.3} sec",
        colors.stats("📊"),
        colors.number(&outcome.result.nodes_explored.to_string()),
        outcome.search_duration
    );

    let order = &outcome.result.exploration_order;
    let shown = if outcome.display_options.full_exploration {
        order.len()
    } else {
        order.len().min(EXPLORATION_PREVIEW)
    };
    let trail = if shown < order.len() { "..." } else { "" };
    println!("🧭 Exploration order: {}{}", order[..shown].join(" → "), trail);
}

pub fn display_comparison(
    from: &str,
    to: &str,
    rows: &[ComparisonRow],
    colors: &ColorScheme,
) {
    println!(
        "🚌 Comparing algorithms from {} to {}\n",
        colors.stop_name(&format!("\"{from}\"")),
        colors.stop_name(&format!("\"{to}\""))
    );

    println!(
        "{:<8} {:>6} {:>6} {:>9} {:>9} {:>8} {:>8}",
        "algo", "found", "hops", "explored", "km", "min", "fare"
    );
    for row in rows {
        let found = if row.route_found { "yes" } else { "no" };
        println!(
            "{:<8} {:>6} {:>6} {:>9} {:>9.1} {:>8} {:>8}",
            row.algorithm.label(),
            found,
            row.hops,
            row.nodes_explored,
            row.total_distance,
            row.total_time,
            row.total_fare
        );
    }
}
