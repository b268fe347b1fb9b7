use buspath::args::Args;
use buspath::colors::ColorScheme;
use buspath::display::{display_comparison, display_route_outcome, display_search_info};
use buspath::json_output::{create_json_output, print_json};
use buspath::search::{create_search_request, execute_search};
use buspath_core::{compare_algorithms, default_network};
use clap::Parser;

fn main() {
    let args = Args::parse();
    let network = default_network();
    let colors = ColorScheme::new(!args.no_color);

    let request = match create_search_request(args, network) {
        Ok(request) => request,
        Err(message) => {
            eprintln!("{} {}", colors.error("❌ Error:"), message);
            std::process::exit(1);
        }
    };

    if request.display_options.compare {
        let rows = compare_algorithms(network, &request.from, &request.to);
        if request.display_options.json {
            print_json(&rows);
        } else {
            display_comparison(&request.from, &request.to, &rows, &colors);
        }
        return;
    }

    if !request.display_options.json && !request.display_options.quiet {
        display_search_info(&request, &colors);
    }

    let outcome = execute_search(request, network);

    if outcome.display_options.json {
        print_json(&create_json_output(&outcome));
    } else {
        display_route_outcome(&outcome, &colors);
    }
}
