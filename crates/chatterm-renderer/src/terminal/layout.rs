/// Screen regions for a given terminal size and separator offset.
///
/// Row 0 holds the folder tabs, row 1 a rule, the last row the command
/// input. Everything between is the body: the chat list on the left, a
/// one-column separator, then the selected chat's messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub columns: u16,
    pub rows: u16,
    pub list_width: u16,
}

pub const TABS_ROW: u16 = 0;
pub const RULE_ROW: u16 = 1;
pub const BODY_TOP: u16 = 2;
const MIN_COLUMN_WIDTH: i32 = 10;

impl Layout {
    pub fn new(columns: u16, rows: u16, separator_offset: i32) -> Self {
        let total = i32::from(columns);
        let list_width = if total >= MIN_COLUMN_WIDTH * 2 + 1 {
            (total / 3)
                .saturating_add(separator_offset)
                .clamp(MIN_COLUMN_WIDTH, total - MIN_COLUMN_WIDTH - 1)
        } else {
            total / 2
        };
        Self {
            columns,
            rows,
            list_width: list_width as u16,
        }
    }

    /// Range of separator offsets that still move the separator on a
    /// terminal `columns` wide. Offsets outside it render like its ends.
    pub fn separator_bounds(columns: u16) -> (i32, i32) {
        let total = i32::from(columns);
        if total < MIN_COLUMN_WIDTH * 2 + 1 {
            return (0, 0);
        }
        let natural = total / 3;
        (
            MIN_COLUMN_WIDTH - natural,
            total - MIN_COLUMN_WIDTH - 1 - natural,
        )
    }

    pub fn body_rows(&self) -> u16 {
        self.rows.saturating_sub(BODY_TOP + 1)
    }

    pub fn command_row(&self) -> u16 {
        self.rows.saturating_sub(1)
    }

    pub fn separator_column(&self) -> u16 {
        self.list_width
    }

    pub fn message_column(&self) -> u16 {
        self.list_width.saturating_add(1).min(self.columns)
    }

    pub fn message_width(&self) -> u16 {
        self.columns.saturating_sub(self.message_column())
    }
}

/// Cut `text` to `width` characters and pad it so it overwrites whatever
/// the cell range held before.
pub fn fit(text: &str, width: u16) -> String {
    let width = usize::from(width);
    let mut line: String = text.chars().take(width).collect();
    let used = line.chars().count();
    line.extend(std::iter::repeat(' ').take(width - used));
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_offset_moves_list_edge() {
        assert_eq!(Layout::new(90, 24, 0).list_width, 30);
        assert_eq!(Layout::new(90, 24, 5).list_width, 35);
        assert_eq!(Layout::new(90, 24, -5).list_width, 25);
    }

    #[test]
    fn list_width_is_clamped() {
        assert_eq!(Layout::new(90, 24, -100).list_width, 10);
        assert_eq!(Layout::new(90, 24, 100).list_width, 79);
        assert_eq!(Layout::new(12, 24, 3).list_width, 6);
    }

    #[test]
    fn extreme_offsets_do_not_overflow() {
        assert_eq!(Layout::new(90, 24, i32::MAX).list_width, 79);
        assert_eq!(Layout::new(90, 24, i32::MIN).list_width, 10);
    }

    #[test]
    fn separator_bounds_match_clamp() {
        let (min, max) = Layout::separator_bounds(90);
        assert_eq!((min, max), (-20, 49));
        assert_eq!(Layout::new(90, 24, min).list_width, 10);
        assert_eq!(Layout::new(90, 24, max).list_width, 79);
        assert_eq!(Layout::new(90, 24, max - 1).list_width, 78);
        assert_eq!(Layout::separator_bounds(12), (0, 0));
    }

    #[test]
    fn rows_split() {
        let layout = Layout::new(80, 24, 0);
        assert_eq!(layout.body_rows(), 21);
        assert_eq!(layout.command_row(), 23);
        assert_eq!(Layout::new(80, 1, 0).body_rows(), 0);
    }

    #[test]
    fn fit_truncates_and_pads() {
        assert_eq!(fit("hello", 3), "hel");
        assert_eq!(fit("hi", 4), "hi  ");
        assert_eq!(fit("", 0), "");
    }
}
