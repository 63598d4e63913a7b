use crate::grid::{Cell, Sheet};

/// Renders a sheet as a bordered ASCII grid, one character per storage cell:
/// `.` for free cells, the product id keyed `0-9a-z` for occupied cells, and
/// a blank for cells outside the usable region.
pub fn render_sheet<S: Sheet>(sheet: &S) -> String {
    let storage = sheet.storage_size();
    let usable = sheet.usable_size();

    let mut out = String::new();
    out.push('+');
    out.push_str(&"-".repeat(storage.w));
    out.push_str("+\n");

    for r in 0..storage.h {
        out.push('|');
        for c in 0..storage.w {
            let ch = if r >= usable.h || c >= usable.w {
                ' '
            } else {
                match sheet.cell(r, c) {
                    Cell::Free => '.',
                    Cell::Occupied(id) => id_glyph(id),
                }
            };
            out.push(ch);
        }
        out.push_str("|\n");
    }

    out.push('+');
    out.push_str(&"-".repeat(storage.w));
    out.push_str("+\n");
    out
}

fn id_glyph(id: u32) -> char {
    match id % 36 {
        d @ 0..=9 => (b'0' + d as u8) as char,
        a => (b'a' + (a - 10) as u8) as char,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::StockGrid;
    use crate::types::{Position, Size};

    #[test]
    fn test_render_empty_sheet() {
        let output = render_sheet(&StockGrid::new(2, 3));
        assert_eq!(output, "+---+\n|...|\n|...|\n+---+\n");
    }

    #[test]
    fn test_render_occupied_cells_keyed_by_id() {
        let mut grid = StockGrid::new(2, 3);
        assert!(grid.place(Position::new(0, 0), Size::new(1, 2), 0));
        assert!(grid.place(Position::new(1, 2), Size::new(1, 1), 11));
        let output = render_sheet(&grid);
        assert_eq!(output, "+---+\n|00.|\n|..b|\n+---+\n");
    }

    #[test]
    fn test_render_blanks_outside_usable_region() {
        let grid = StockGrid::with_storage(Size::new(2, 4), Size::new(2, 2));
        let output = render_sheet(&grid);
        assert_eq!(output, "+----+\n|..  |\n|..  |\n+----+\n");
    }
}
