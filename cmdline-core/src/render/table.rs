// Column layout for the help listing. Widths are measured on the visible text,
// so ANSI color codes in cells don't skew the alignment.

const COLUMN_GAP: &str = "    ";

#[derive(Debug, Clone)]
pub struct Cell {
    text: String,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn strip_ansi(text: &str) -> String {
        let mut result = String::new();
        let mut chars = text.chars();

        while let Some(c) = chars.next() {
            if c == '\x1B' {
                // Skip until we find 'm'
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                result.push(c);
            }
        }
        result
    }

    pub fn width(&self) -> usize {
        Self::strip_ansi(&self.text).chars().count()
    }

    pub fn is_blank(&self) -> bool {
        self.width() == 0
    }
}

#[derive(Debug, Clone, Default)]
pub struct Table {
    prefix: String,
    rows: Vec<Vec<Cell>>,
    column_widths: Vec<usize>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text written at the start of every row, e.g. a bullet
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    pub fn add_row(&mut self, row: Vec<Cell>) {
        for (i, cell) in row.iter().enumerate() {
            let width = cell.width();
            if i >= self.column_widths.len() {
                self.column_widths.push(width);
            } else if width > self.column_widths[i] {
                self.column_widths[i] = width;
            }
        }
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn pad_cell(cell: &Cell, width: usize) -> String {
        let padding = width.saturating_sub(cell.width());
        format!("{}{}", cell.text, " ".repeat(padding))
    }

    pub fn render(&self) -> String {
        let mut output = String::new();

        for row in &self.rows {
            // Trailing blank cells would only add padding
            let used = row.iter().rposition(|cell| !cell.is_blank()).map_or(0, |i| i + 1);
            let cells: Vec<String> = row[..used]
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    if i + 1 == used {
                        cell.text.clone()
                    } else {
                        Self::pad_cell(cell, self.column_widths[i])
                    }
                })
                .collect();

            output.push_str(&self.prefix);
            output.push_str(cells.join(COLUMN_GAP).trim_end());
            output.push('\n');
        }

        output
    }
}
