pub fn render_schema() -> String {
	let init = include_str!("../../../sql/init.sql");

	expand_includes(init)
}

fn expand_includes(sql: &str) -> String {
	let mut out = String::new();

	for line in sql.lines() {
		let trimmed = line.trim();

		if let Some(path) = trimmed.strip_prefix("\\ir ") {
			match path.trim() {
				"tables/001_areas.sql" =>
					out.push_str(include_str!("../../../sql/tables/001_areas.sql")),
				"tables/002_houses.sql" =>
					out.push_str(include_str!("../../../sql/tables/002_houses.sql")),
				"tables/003_facilities.sql" =>
					out.push_str(include_str!("../../../sql/tables/003_facilities.sql")),
				"tables/004_house_facilities.sql" =>
					out.push_str(include_str!("../../../sql/tables/004_house_facilities.sql")),
				"tables/005_house_images.sql" =>
					out.push_str(include_str!("../../../sql/tables/005_house_images.sql")),
				"tables/006_orders.sql" =>
					out.push_str(include_str!("../../../sql/tables/006_orders.sql")),
				"tables/007_result_cache.sql" =>
					out.push_str(include_str!("../../../sql/tables/007_result_cache.sql")),
				_ => out.push_str(line),
			}
		} else {
			out.push_str(line);
		}

		out.push('\n');
	}

	out
}
