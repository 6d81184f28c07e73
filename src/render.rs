//! Codewords to pixels.

use crate::canvas::PixelGrid;
use crate::generators::PDF417RowIterator;
use crate::layout::Layout;
use crate::settings::ResolvedSettings;
use crate::tables::PatternTable;

/// Paints module `module` of row `row`: `module_width` pixels wide and
/// `module_width * row_height` pixels high, shifted by the quiet zone.
pub fn draw_module(grid: &mut PixelGrid, settings: &ResolvedSettings, row: usize, module: usize, dark: bool) {
    let (w, h) = (settings.module_width, settings.row_pixels());
    let x0 = settings.quiet_zone + module * w;
    let y0 = settings.quiet_zone + row * h;

    for y in y0..y0 + h {
        for x in x0..x0 + w {
            grid.set(x, y, dark);
        }
    }
}

/// Size in pixels of the symbol, quiet zone included.
pub const fn grid_size(layout: &Layout, settings: &ResolvedSettings) -> (usize, usize) {
    let width = layout.width_modules(settings.compact) * settings.module_width + 2 * settings.quiet_zone;
    let height = layout.rows() * settings.row_pixels() + 2 * settings.quiet_zone;
    (width, height)
}

/// Draws every row of `codewords` (data, padding and correction, row by
/// row) into a new grid.
pub fn render<T: PatternTable + ?Sized>(
    table: &T,
    codewords: &[u16],
    layout: &Layout,
    settings: &ResolvedSettings,
) -> PixelGrid {
    let (width, height) = grid_size(layout, settings);
    let mut grid = PixelGrid::new(width, height);

    let rows = PDF417RowIterator::new(table, codewords, *layout, settings.level, settings.compact);
    for (row, patterns) in rows.enumerate() {
        let mut module = 0;
        for pattern in patterns {
            for dark in pattern.iter() {
                // the grid starts light
                if dark {
                    draw_module(&mut grid, settings, row, module, true);
                }
                module += 1;
            }
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::tables::{SyntheticTable, START_PATTERN};

    #[test]
    fn test_draw_module() {
        let settings = Settings::default().with_module_width(2).with_row_height(2).with_quiet_zone(1).resolve(1).unwrap();
        let mut grid = PixelGrid::new(10, 10);
        draw_module(&mut grid, &settings, 1, 2, true);

        let dark: Vec<(usize, usize)> = (0..10)
            .flat_map(|y| (0..10).map(move |x| (x, y)))
            .filter(|&(x, y)| grid.get(x, y))
            .collect();
        // x from 1 + 2 * 2, y from 1 + 1 * 4
        assert_eq!(dark, [(5, 5), (6, 5), (5, 6), (6, 6), (5, 7), (6, 7), (5, 8), (6, 8)]);

        draw_module(&mut grid, &settings, 1, 2, false);
        assert!(grid.bits().is_clear());
    }

    #[test]
    fn test_render_start_pattern_and_quiet_zone() {
        let settings = Settings::default().resolve(6).unwrap();
        let layout = Layout::compute(15, &settings).unwrap();
        let codewords = vec![0u16; layout.capacity()];
        let grid = render(&SyntheticTable, &codewords, &layout, &settings);

        assert_eq!(grid.width(), 103 * 4 + 16);
        assert_eq!(grid.height(), 8 * 12 + 16);

        // quiet zone is light
        for x in 0..grid.width() {
            assert!(!grid.get(x, 0) && !grid.get(x, 7) && !grid.get(x, grid.height() - 1));
        }
        for y in 0..grid.height() {
            assert!(!grid.get(7, y) && !grid.get(grid.width() - 8, y));
        }

        // every row starts with the start pattern and ends with a bar
        for row in 0..8 {
            let y = 8 + row * 12 + 5;
            for m in 0..17 {
                let expected = START_PATTERN & (1 << (16 - m)) != 0;
                for dx in 0..4 {
                    assert_eq!(grid.get(8 + m * 4 + dx, y), expected, "row {row} module {m}");
                }
            }
            assert!(grid.get(8 + 102 * 4 + 3, y));
        }
    }
}
