use crate::application::view::{
    AffectedSerialsView, DashboardSnapshot, Placeholder, PlaceholderTone, RegionContent,
    RegionId, RegionSnapshot, SerialListView, SupplierTableView, TraceDetailView,
};
use crate::ports::outbound::ViewRenderer;
use crate::shared::Result;
use crate::traceability::domain::HealthStatus;
use crate::traceability::policies::PillVariant;
use owo_colors::{OwoColorize, Style};
use std::fmt::Write;

const INDENT: &str = "  ";

/// TextRenderer adapter for terminal output
///
/// Renders the health line, then every region that has something to show.
/// Colour is optional so output stays readable when piped.
pub struct TextRenderer {
    colored: bool,
}

impl TextRenderer {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.colored {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn pill(&self, text: &str, variant: PillVariant) -> String {
        let style = match variant {
            PillVariant::Ok => Style::new().green().bold(),
            PillVariant::Reject => Style::new().red().bold(),
        };
        self.paint(&format!("[{}]", text), style)
    }
}

/// Section renderers
impl TextRenderer {
    fn render_health(&self, out: &mut String, snapshot: &DashboardSnapshot) -> Result<()> {
        let (dot, style) = match snapshot.health.status {
            HealthStatus::Ok => ("●", Style::new().green()),
            HealthStatus::Error(_) => ("✗", Style::new().red()),
            HealthStatus::Pending => ("○", Style::new().yellow()),
        };
        writeln!(
            out,
            "{} {}  {}",
            self.paint(dot, style),
            snapshot.health.message,
            self.paint(&format!("API {}", snapshot.api_base), Style::new().dimmed())
        )?;
        Ok(())
    }

    fn render_region(
        &self,
        out: &mut String,
        region: &RegionSnapshot,
        snapshot: &DashboardSnapshot,
    ) -> Result<()> {
        let input = &snapshot.trace_input;
        let shows_input =
            region.id == RegionId::Trace && (!input.value.is_empty() || input.notice.is_some());
        if region.content.is_blank() && !shows_input {
            return Ok(());
        }

        out.push('\n');
        let controls: Vec<String> = region
            .controls
            .iter()
            .map(|c| {
                if c.enabled {
                    format!("[{}]", c.label)
                } else {
                    self.paint(&format!("[{}]", c.label), Style::new().dimmed())
                }
            })
            .collect();
        writeln!(
            out,
            "{} {}",
            self.paint(region.id.title(), Style::new().bold().underline()),
            controls.join(" ")
        )?;

        if shows_input {
            self.render_trace_input(out, snapshot)?;
        }

        match &region.content {
            RegionContent::Blank => {}
            RegionContent::Placeholder(p) => self.render_placeholder(out, p)?,
            RegionContent::SupplierTable(table) => self.render_supplier_table(out, table)?,
            RegionContent::TraceDetail(detail) => self.render_trace_detail(out, detail)?,
            RegionContent::SerialList(list) => self.render_serial_list(out, list)?,
        }
        Ok(())
    }

    fn render_trace_input(&self, out: &mut String, snapshot: &DashboardSnapshot) -> Result<()> {
        let input = &snapshot.trace_input;
        let marker = if input.focused { " ◂" } else { "" };
        writeln!(out, "{}Serial: {}{}", INDENT, input.value, marker)?;
        if let Some(notice) = &input.notice {
            writeln!(out, "{}{}", INDENT, self.paint(notice, Style::new().red()))?;
        }
        Ok(())
    }

    fn render_placeholder(&self, out: &mut String, placeholder: &Placeholder) -> Result<()> {
        let style = match placeholder.tone {
            PlaceholderTone::Loading => Style::new().dimmed(),
            PlaceholderTone::Guidance => Style::new().italic(),
            PlaceholderTone::NotFound => Style::new().yellow(),
            PlaceholderTone::Error => Style::new().red(),
        };
        writeln!(out, "{}{}", INDENT, self.paint(&placeholder.message, style))?;
        Ok(())
    }

    fn render_supplier_table(&self, out: &mut String, table: &SupplierTableView) -> Result<()> {
        writeln!(
            out,
            "{}{}",
            INDENT,
            self.paint(&table.caption, Style::new().dimmed())
        )?;

        let cells: Vec<[&str; 4]> = table
            .rows
            .iter()
            .map(|r| {
                [
                    r.supplier.as_str(),
                    r.supplier_id.as_str(),
                    r.total.as_str(),
                    r.rejected.as_str(),
                ]
            })
            .collect();
        let mut widths = [0usize; 4];
        for (i, width) in widths.iter_mut().enumerate() {
            let header = table.columns.get(i).map_or(0, |c| c.chars().count());
            let longest = cells.iter().map(|c| c[i].chars().count()).max().unwrap_or(0);
            *width = header.max(longest);
        }

        let mut header_line = String::from(INDENT);
        for (i, width) in widths.iter().enumerate() {
            let name = table.columns.get(i).map(String::as_str).unwrap_or("");
            write!(header_line, "{:<w$}  ", name, w = *width)?;
        }
        header_line.push_str(table.columns.get(4).map(String::as_str).unwrap_or(""));
        writeln!(out, "{}", self.paint(&header_line, Style::new().bold()))?;

        for (row, cell) in table.rows.iter().zip(&cells) {
            out.push_str(INDENT);
            for (value, width) in cell.iter().zip(widths) {
                write!(out, "{:<w$}  ", value, w = width)?;
            }
            writeln!(out, "{}", self.pill(&row.rate, row.pill))?;
        }
        Ok(())
    }

    fn render_trace_detail(&self, out: &mut String, detail: &TraceDetailView) -> Result<()> {
        writeln!(
            out,
            "{}{}",
            INDENT,
            self.pill(&detail.status_label, detail.status_pill)
        )?;
        writeln!(out, "{}Serial    {}", INDENT, detail.serial)?;
        writeln!(out, "{}Batch     {}", INDENT, detail.batch_id)?;
        writeln!(
            out,
            "{}Supplier  {} {}",
            INDENT,
            detail.supplier_name,
            self.paint(&format!("({})", detail.supplier_id), Style::new().dimmed())
        )?;
        writeln!(out, "{}All serials in this batch", INDENT)?;
        match &detail.affected {
            AffectedSerialsView::List { serials } => {
                for serial in serials {
                    writeln!(out, "{}{}- {}", INDENT, INDENT, serial)?;
                }
            }
            AffectedSerialsView::NoOthers { note } => {
                writeln!(
                    out,
                    "{}{}{}",
                    INDENT,
                    INDENT,
                    self.paint(note, Style::new().dimmed())
                )?;
            }
        }
        Ok(())
    }

    fn render_serial_list(&self, out: &mut String, list: &SerialListView) -> Result<()> {
        for (i, serial) in list.serials.iter().enumerate() {
            writeln!(out, "{}{:>2}. {}", INDENT, i + 1, serial)?;
        }
        writeln!(
            out,
            "{}{}",
            INDENT,
            self.paint(
                "Pick a number to copy that serial into the trace input.",
                Style::new().dimmed()
            )
        )?;
        Ok(())
    }
}

impl ViewRenderer for TextRenderer {
    fn render(&self, snapshot: &DashboardSnapshot) -> Result<String> {
        let mut out = String::new();
        self.render_health(&mut out, snapshot)?;
        for region in &snapshot.regions {
            self.render_region(&mut out, region, snapshot)?;
        }
        Ok(out)
    }
}
