use crate::statistics::StatisticsTable;

const HEADER: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

fn width(cell: &str) -> usize {
    cell.chars().count()
}

fn border(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line
}

/// Writes the title over the start of the top border when there is room for it
fn titled_border(widths: &[usize], title: &str) -> String {
    let line = border(widths);
    let len = width(&line);
    if width(title) + 2 > len {
        return line;
    }
    let mut titled = String::from("+");
    titled.push_str(title);
    titled.extend(line.chars().skip(1 + width(title)));
    titled
}

fn row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, w) in cells.iter().zip(widths) {
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(w - width(cell)));
        line.push_str(" |");
    }
    line
}

/// Boxed ASCII table with a heading row, titled "{platform} Moscow".
/// A language without processed salaries gets an empty average cell rather than a placeholder.
pub fn render_table(statistics: &StatisticsTable, platform: &str) -> String {
    let mut rows = vec![HEADER.iter().map(|h| h.to_string()).collect::<Vec<_>>()];
    for (language, stats) in statistics.iter() {
        rows.push(vec![
            language.to_owned(),
            stats.vacancies_found.to_string(),
            stats.vacancies_processed.to_string(),
            stats
                .average_salary
                .map(|salary| salary.to_string())
                .unwrap_or_default(),
        ]);
    }

    let mut widths = [0usize; HEADER.len()];
    for cells in &rows {
        for (w, cell) in widths.iter_mut().zip(cells) {
            *w = (*w).max(width(cell));
        }
    }

    let title = format!("{} Moscow", platform);
    let mut lines = vec![titled_border(&widths, &title), row(&rows[0], &widths)];
    lines.push(border(&widths));
    lines.extend(rows[1..].iter().map(|cells| row(cells, &widths)));
    lines.push(border(&widths));
    lines.join("\n")
}

pub fn print_statistics_table(statistics: &StatisticsTable, platform: &str) {
    println!("{}", render_table(statistics, platform));
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::statistics::summarize;

    #[test]
    fn test_render_table() {
        let mut table = StatisticsTable::new();
        table.insert("Python".to_owned(), summarize(10, vec![1000.0, 2000.0]));
        table.insert("C#".to_owned(), summarize(3, Vec::new()));
        let expected = [
            "+HeadHunter Moscow------+------------------+---------------------+------------------+",
            "| Язык программирования | Вакансий найдено | Вакансий обработано | Средняя зарплата |",
            "+-----------------------+------------------+---------------------+------------------+",
            "| Python                | 10               | 2                   | 1500             |",
            "| C#                    | 3                | 0                   |                  |",
            "+-----------------------+------------------+---------------------+------------------+",
        ]
        .join("\n");
        assert_eq!(render_table(&table, "HeadHunter"), expected);
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let rendered = render_table(&StatisticsTable::new(), "SuperJob");
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("+SuperJob Moscow-"));
        assert!(lines[1].contains("Средняя зарплата"));
    }

    #[test]
    fn test_long_title_is_dropped() {
        let mut table = StatisticsTable::new();
        table.insert("Go".to_owned(), summarize(1, Vec::new()));
        let title = "x".repeat(200);
        let rendered = render_table(&table, &title);
        assert!(rendered.lines().next().unwrap().starts_with("+-------"));
    }
}
