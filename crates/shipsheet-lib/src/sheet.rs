//! Plain-text sheet rendering.
//!
//! Consumes a fully equipped [`Ship`] and produces a paginated monospace
//! document: title, stat boxes in two columns, trait table, core and slot
//! system tables side by side, then the weapons and bays tables. Pages are
//! separated by form feeds. Column widths fit the longest header or cell
//! plus fixed padding, and the last column of each table absorbs the
//! remaining page width and wraps.

use std::fs;
use std::path::Path;

use crate::dice::scale_dice;
use crate::error::Result;
use crate::ship::{Bay, Mount, Ship, ShipSystem};
use crate::stats::{ShipStat, ALL_STATS};

const MOUNT_TABLE_HEADINGS: [&str; 9] = [
    "WEAPON NAME",
    "POS",
    "RANGE",
    "AMMO",
    "PW",
    "SHOTS",
    "AP",
    "DMG",
    "TAGS",
];

const BAY_TABLE_HEADINGS: [&str; 9] = [
    "PAYLOAD NAME",
    "POS",
    "SPEED",
    "AMMO",
    "PW",
    "SWARM",
    "AP",
    "DMG",
    "TAGS",
];

const TRAIT_TABLE_HEADINGS: [&str; 2] = ["NAME", "DESCRIPTION"];

/// One damage box as printed on the sheet.
pub const DAMAGE_BUBBLE: &str = "[_]";

const COLUMN_SPACING: usize = 2;
const HALF_PAGE_GAP: usize = 4;

/// Renders equipped ships into paginated text sheets.
#[derive(Debug, Clone)]
pub struct SheetRenderer {
    pub page_width: usize,
    pub page_height: usize,
}

impl Default for SheetRenderer {
    fn default() -> Self {
        Self {
            page_width: 96,
            page_height: 56,
        }
    }
}

impl SheetRenderer {
    /// Render the full sheet document.
    pub fn render(&self, ship: &Ship) -> Result<String> {
        let mut lines: Vec<String> = Vec::new();

        lines.push(center(&ship.name.to_uppercase(), self.page_width));
        lines.push(center(
            &format!("{} CLASS - {} POINTS", ship.class, ship.point_cost),
            self.page_width,
        ));
        lines.push(String::new());

        self.render_stats(&mut lines, ship);
        lines.push(String::new());

        self.render_traits(&mut lines, ship);
        lines.push(String::new());

        self.render_system_tables(&mut lines, ship);
        lines.push(String::new());

        lines.push("WEAPONS".to_string());
        let mount_rows = ship
            .mounts
            .iter()
            .map(mount_row)
            .collect::<Result<Vec<_>>>()?;
        self.render_table(&mut lines, &MOUNT_TABLE_HEADINGS, &mount_rows);
        lines.push(String::new());

        lines.push("BAYS".to_string());
        let bay_rows = ship
            .bays
            .iter()
            .map(bay_row)
            .collect::<Result<Vec<_>>>()?;
        self.render_table(&mut lines, &BAY_TABLE_HEADINGS, &bay_rows);

        Ok(self.paginate(&lines))
    }

    /// Render and write the document to a path, overwriting any existing
    /// file.
    pub fn write(&self, ship: &Ship, path: &Path) -> Result<()> {
        let document = self.render(ship)?;
        fs::write(path, document)?;
        Ok(())
    }

    fn paginate(&self, lines: &[String]) -> String {
        let mut out = String::new();
        for (i, line) in lines.iter().enumerate() {
            if i > 0 && i % self.page_height == 0 {
                out.push('\u{c}');
                out.push('\n');
            }
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Gauge stats in the left column, flat stats in the right.
    fn render_stats(&self, lines: &mut Vec<String>, ship: &Ship) {
        let left: Vec<String> = ALL_STATS
            .iter()
            .filter(|s| s.is_gauge())
            .map(|s| stat_line(ship, *s))
            .collect();
        let right: Vec<String> = ALL_STATS
            .iter()
            .filter(|s| !s.is_gauge())
            .map(|s| stat_line(ship, *s))
            .collect();
        join_columns(lines, &left, &right, self.page_width);
    }

    fn render_traits(&self, lines: &mut Vec<String>, ship: &Ship) {
        if ship.traits.is_empty() {
            return;
        }
        lines.push("TRAITS".to_string());
        let rows: Vec<Vec<String>> = ship
            .traits
            .iter()
            .map(|t| vec![t.name.clone(), t.description.clone()])
            .collect();
        self.render_table(lines, &TRAIT_TABLE_HEADINGS, &rows);
    }

    /// Core systems on the left; slot systems on the right, padded with
    /// blank fill-in rows up to the ship's free slot count.
    fn render_system_tables(&self, lines: &mut Vec<String>, ship: &Ship) {
        let half_width = (self.page_width - HALF_PAGE_GAP) / 2;

        let core: Vec<Option<&ShipSystem>> = ship
            .systems()
            .iter()
            .filter(|s| s.slots == 0)
            .map(Some)
            .collect();
        let mut slot: Vec<Option<&ShipSystem>> = ship
            .systems()
            .iter()
            .filter(|s| s.slots > 0)
            .map(Some)
            .collect();
        for _ in 0..ship.free_system_slots() {
            slot.push(None);
        }

        let left = system_table_lines("SYSTEMS - CORE", &core, half_width);
        let right = system_table_lines("SYSTEMS - SLOTS", &slot, half_width);
        join_columns(lines, &left, &right, self.page_width);
    }

    /// Render a table whose last column wraps within the page width.
    fn render_table(&self, lines: &mut Vec<String>, headings: &[&str], rows: &[Vec<String>]) {
        let mut widths: Vec<usize> = headings
            .iter()
            .enumerate()
            .take(headings.len() - 1)
            .map(|(i, heading)| {
                let content = rows.iter().map(|r| r[i].len()).max().unwrap_or(0);
                content.max(heading.len()) + COLUMN_SPACING
            })
            .collect();
        let used: usize = widths.iter().sum();
        // Last column takes whatever is left of the page.
        let last_width = self.page_width.saturating_sub(used).max(8);
        widths.push(last_width);

        lines.push(table_line(
            &headings.iter().map(|h| h.to_string()).collect::<Vec<_>>(),
            &widths,
        ));
        lines.push("-".repeat(self.page_width.min(used + last_width)));
        for row in rows {
            let wrapped = wrap_text(row.last().map(String::as_str).unwrap_or(""), last_width);
            let mut first = row.clone();
            *first.last_mut().expect("rows are never empty") = wrapped[0].clone();
            lines.push(table_line(&first, &widths));
            for continuation in &wrapped[1..] {
                lines.push(format!("{}{}", " ".repeat(used), continuation));
            }
        }
    }
}

/// One row of the weapons table for a mount, equipped or not.
fn mount_row(mount: &Mount) -> Result<Vec<String>> {
    let row = match mount.weapon() {
        Some(weapon) => vec![
            format!("{} {}", DAMAGE_BUBBLE, weapon.name),
            mount.position_code(),
            weapon.range.to_string(),
            weapon.ammo_cost.to_string(),
            weapon.power_cost.to_string(),
            scale_dice(&weapon.shots()?, mount.count)?,
            weapon.ap.to_string(),
            weapon.damage.clone(),
            weapon.tags.join(", "),
        ],
        None => vec![
            DAMAGE_BUBBLE.to_string(),
            mount.position_code(),
            String::new(),
            String::new(),
            String::new(),
            format!("(x{})", mount.count),
            String::new(),
            String::new(),
            String::new(),
        ],
    };
    Ok(row)
}

/// One row of the bays table for a bay, equipped or not.
fn bay_row(bay: &Bay) -> Result<Vec<String>> {
    let row = match bay.craft() {
        Some(craft) => vec![
            format!("{} {}", DAMAGE_BUBBLE, craft.name),
            bay.position_code(),
            craft
                .stat(ShipStat::Speed)
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string()),
            craft.ammo_cost.to_string(),
            craft.power_cost.to_string(),
            format!("{}(x{})", craft.swarm()?, bay.effective_count()),
            craft.ap().to_string(),
            craft.damage().to_string(),
            craft.tags.join(", "),
        ],
        None => vec![
            DAMAGE_BUBBLE.to_string(),
            bay.position_code(),
            String::new(),
            String::new(),
            String::new(),
            format!("(x{})", bay.count),
            String::new(),
            String::new(),
            String::new(),
        ],
    };
    Ok(row)
}

/// Damage bubbles for a system: one per hit point, labelled when the
/// system defines bubble labels.
fn bubble_text(system: &ShipSystem) -> String {
    match &system.bubble_labels {
        Some(labels) => labels
            .iter()
            .map(|label| format!("[{}]", label))
            .collect::<Vec<_>>()
            .join(""),
        None => DAMAGE_BUBBLE.repeat(system.hp as usize),
    }
}

/// Lines of one system table column: title, then name/bubbles/description
/// rows at 35%/20%/45% of the column width. `None` entries render as
/// fill-in rows for free slots.
fn system_table_lines(title: &str, systems: &[Option<&ShipSystem>], width: usize) -> Vec<String> {
    let name_width = width * 35 / 100;
    let bubble_width = width * 20 / 100;
    let desc_width = width.saturating_sub(name_width + bubble_width).max(8);

    let mut lines = vec![title.to_string(), "-".repeat(width)];
    for entry in systems {
        match entry {
            Some(system) => {
                let wrapped = wrap_text(&system.description, desc_width);
                lines.push(format!(
                    "{:<name_width$}{:<bubble_width$}{}",
                    clip(&system.name, name_width),
                    clip(&bubble_text(system), bubble_width),
                    wrapped[0],
                ));
                for continuation in &wrapped[1..] {
                    lines.push(format!(
                        "{}{}",
                        " ".repeat(name_width + bubble_width),
                        continuation
                    ));
                }
            }
            None => lines.push(format!(
                "{} {} {}",
                "_".repeat(name_width.saturating_sub(1)),
                "_".repeat(bubble_width.saturating_sub(1)),
                "_".repeat(desc_width.saturating_sub(1)),
            )),
        }
    }
    lines
}

fn stat_line(ship: &Ship, stat: ShipStat) -> String {
    let value = ship.stat(stat).unwrap_or(0);
    if stat.is_gauge() {
        format!("{:<10} [    /{:>3} ]", stat.to_string(), value)
    } else {
        format!("{:<10} [ {:>3} (+  )]", stat.to_string(), value)
    }
}

/// Interleave two pre-rendered columns side by side across the page.
fn join_columns(lines: &mut Vec<String>, left: &[String], right: &[String], page_width: usize) {
    let half_width = (page_width - HALF_PAGE_GAP) / 2;
    let rows = left.len().max(right.len());
    for i in 0..rows {
        let l = left.get(i).map(String::as_str).unwrap_or("");
        let r = right.get(i).map(String::as_str).unwrap_or("");
        let line = format!(
            "{:<width$}{}{}",
            l,
            " ".repeat(HALF_PAGE_GAP),
            r,
            width = half_width
        );
        lines.push(line.trim_end().to_string());
    }
}

fn table_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        if i + 1 == cells.len() {
            line.push_str(cell);
        } else {
            line.push_str(&format!("{:<width$}", cell, width = *width));
        }
    }
    line.trim_end().to_string()
}

fn center(text: &str, width: usize) -> String {
    format!("{:^width$}", text, width = width)
        .trim_end()
        .to_string()
}

fn clip(text: &str, width: usize) -> String {
    if text.len() > width {
        text.chars().take(width.saturating_sub(1)).collect()
    } else {
        text.to_string()
    }
}

/// Greedy word wrap. Always yields at least one line.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    lines.push(current);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width_and_never_returns_empty() {
        let lines = wrap_text("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn bubbles_repeat_per_hit_point() {
        let plain = ShipSystem::new("Engine".into(), String::new(), 0, 3, None, Vec::new()).unwrap();
        assert_eq!(bubble_text(&plain), "[_][_][_]");

        let labelled = ShipSystem::new(
            "Magazine".into(),
            String::new(),
            1,
            2,
            Some(vec!["Full".into(), "Empty".into()]),
            Vec::new(),
        )
        .unwrap();
        assert_eq!(bubble_text(&labelled), "[Full][Empty]");
    }

    #[test]
    fn columns_join_with_padding() {
        let mut lines = Vec::new();
        join_columns(
            &mut lines,
            &["left".to_string()],
            &["right".to_string(), "more".to_string()],
            20,
        );
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("left"));
        assert!(lines[0].ends_with("right"));
        assert!(lines[1].trim_start().starts_with("more"));
    }
}
