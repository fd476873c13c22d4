//! Plain-text table rendering for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    footer: Option<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            footer: None,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Totals line, rendered under a separator.
    pub fn set_footer(&mut self, footer: Vec<String>) {
        self.footer = Some(footer);
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        let all_rows = self.rows.iter().chain(self.footer.iter());
        for row in all_rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() && cell.width() > widths[i] {
                    widths[i] = cell.width();
                }
            }
        }
        widths
    }

    fn render_line(cells: &[String], widths: &[usize], out: &mut String) {
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            out.push_str(cell);
            // pad by display width, not byte length
            let pad = width.saturating_sub(cell.width()) + 2;
            out.extend(std::iter::repeat_n(' ', pad));
        }
        while out.ends_with(' ') {
            out.pop();
        }
        out.push('\n');
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let total: usize = widths.iter().map(|w| w + 2).sum::<usize>().saturating_sub(2);

        let mut out = String::new();
        Self::render_line(&self.headers, &widths, &mut out);
        out.push_str(&"-".repeat(total));
        out.push('\n');

        for row in &self.rows {
            Self::render_line(row, &widths, &mut out);
        }

        if let Some(footer) = &self.footer {
            out.push_str(&"-".repeat(total));
            out.push('\n');
            Self::render_line(footer, &widths, &mut out);
        }

        out
    }
}
