use clap::Parser;
use cutfit::grid::{Sheet, StockGrid};
use cutfit::policy;
use cutfit::render;
use cutfit::types::{Demand, Size};

#[derive(Parser)]
#[command(
    name = "cutfit",
    about = "Best-fit placement picker for 2D stock cutting"
)]
struct Cli {
    /// Stock sheet sizes (HxW, e.g. 5x5 8x4)
    #[arg(long = "stocks", num_args = 1.., required = true)]
    stocks: Vec<String>,

    /// Product demands as HxW:qty (e.g. 2x3:1 1x1:4)
    #[arg(long = "products", num_args = 1.., required = true)]
    products: Vec<String>,

    /// Keep placing until no demand fits anywhere
    #[arg(long)]
    simulate: bool,

    /// Show ASCII layout of each sheet
    #[arg(long)]
    layout: bool,
}

fn parse_size(s: &str) -> Result<Size, String> {
    let parts: Vec<&str> = s.split('x').collect();
    if parts.len() != 2 {
        return Err(format!("invalid size '{}', expected HxW", s));
    }
    let h = parts[0]
        .parse::<usize>()
        .map_err(|_| format!("invalid height in '{}'", s))?;
    let w = parts[1]
        .parse::<usize>()
        .map_err(|_| format!("invalid width in '{}'", s))?;
    if h == 0 || w == 0 {
        return Err(format!("dimensions must be non-zero in '{}'", s));
    }
    Ok(Size::new(h, w))
}

fn parse_product(s: &str) -> Result<Demand, String> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 2 {
        return Err(format!("invalid product '{}', expected HxW:qty", s));
    }
    let size = parse_size(parts[0])?;
    let quantity = parts[1]
        .parse::<u32>()
        .map_err(|_| format!("invalid quantity in '{}'", s))?;
    if quantity == 0 {
        return Err(format!("quantity must be non-zero in '{}'", s));
    }
    Ok(Demand { size, quantity })
}

fn main() {
    let cli = Cli::parse();

    let mut stocks: Vec<StockGrid> = cli
        .stocks
        .iter()
        .map(|s| parse_size(s).map(|size| StockGrid::new(size.h, size.w)))
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    let mut products: Vec<Demand> = cli
        .products
        .iter()
        .map(|p| parse_product(p))
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    let mut placed = 0u32;
    if cli.simulate {
        while let Some(action) = policy::select_action(&stocks, &products) {
            // The policy reports the chosen orientation; charge it to the
            // first pending demand it belongs to.
            let Some(idx) = products.iter().position(|p| {
                p.quantity > 0 && (p.size == action.size || p.size == action.size.rotated())
            }) else {
                break;
            };

            if !stocks[action.stock_idx].place(action.position, action.size, idx as u32) {
                eprintln!("Error: selected placement was not applicable");
                std::process::exit(1);
            }
            products[idx].quantity -= 1;
            placed += 1;
            println!(
                "Step {}: {} on stock {} at {}",
                placed, action.size, action.stock_idx, action.position
            );
        }
    } else if let Some(action) = policy::select_action(&stocks, &products) {
        placed = 1;
        println!(
            "Place {} on stock {} at {}",
            action.size, action.stock_idx, action.position
        );
    }

    if placed == 0 {
        println!("No action: nothing placeable.");
    }

    if cli.layout {
        for (i, stock) in stocks.iter().enumerate() {
            println!("Stock {}:", i);
            print!("{}", render::render_sheet(stock));
        }
    }

    if cli.simulate {
        let pending: u32 = products.iter().map(|p| p.quantity).sum();
        let usable: u64 = stocks.iter().map(|s| s.usable_size().area()).sum();
        let free: u64 = stocks.iter().map(|s| s.free_area()).sum();
        let utilization = if usable == 0 {
            0.0
        } else {
            (usable - free) as f64 / usable as f64 * 100.0
        };
        println!(
            "Summary: {} piece{} placed, {} pending, {:.1}% utilization",
            placed,
            if placed == 1 { "" } else { "s" },
            pending,
            utilization,
        );
    }
}
