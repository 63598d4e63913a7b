use crate::grid::Sheet;
use crate::score::find_best_position;
use crate::types::{Action, Demand, Size};

/// Orientations of `prod` that fit within `bounds`: the original size, plus
/// the 90-degree rotation for non-square pieces. Order is preserved,
/// original first.
pub fn orientations(prod: Size, bounds: Size) -> Vec<Size> {
    let mut sizes = vec![prod];
    if prod.h != prod.w {
        sizes.push(prod.rotated());
    }
    sizes.retain(|s| s.fits_in(&bounds));
    sizes
}

/// Picks the single best placement across every pending demand, stock, and
/// valid orientation.
///
/// The comparison is strict greater-than at every level, so on exact score
/// ties the first-encountered candidate wins in demand order, then stock
/// order, then orientation order, then position scan order. One read-only
/// pass over the snapshot; no state is kept between calls, so each
/// invocation re-derives the decision from scratch.
pub fn select_action<S: Sheet>(stocks: &[S], products: &[Demand]) -> Option<Action> {
    let mut best: Option<(Action, i64)> = None;

    for prod in products {
        if prod.quantity == 0 {
            continue;
        }

        for (stock_idx, stock) in stocks.iter().enumerate() {
            for size in orientations(prod.size, stock.usable_size()) {
                if let Some((position, scores)) = find_best_position(stock, size)
                    && (best.is_none() || scores.key() > best.unwrap().1)
                {
                    tracing::debug!(
                        stock_idx,
                        %size,
                        %position,
                        total = scores.total(),
                        "new best candidate"
                    );
                    best = Some((
                        Action {
                            stock_idx,
                            size,
                            position,
                        },
                        scores.key(),
                    ));
                }
            }
        }
    }

    best.map(|(action, _)| action)
}
