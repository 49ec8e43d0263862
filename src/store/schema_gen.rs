use crate::schema::TableSchema;

/// Generate an idempotent CREATE TABLE statement for a table schema
pub fn generate_create_table(schema: &TableSchema) -> String {
    let mut sql = format!("CREATE TABLE IF NOT EXISTS {} (\n", schema.name);
    let mut columns = vec!["    id INTEGER PRIMARY KEY AUTOINCREMENT".to_string()];

    for col in schema.columns {
        let null_constraint = if !col.nullable { " NOT NULL" } else { "" };
        let default = col
            .default
            .map(|literal| format!(" DEFAULT {}", literal))
            .unwrap_or_default();

        columns.push(format!(
            "    {} {}{}{}",
            col.name,
            col.col_type.sql_type(),
            null_constraint,
            default
        ));
    }

    for fk in schema.foreign_keys {
        columns.push(format!(
            "    FOREIGN KEY ({}) REFERENCES {}({})",
            fk.column, fk.references_table, fk.references_column
        ));
    }

    sql.push_str(&columns.join(",\n"));
    sql.push_str("\n)");

    sql
}

/// Generate CREATE INDEX statements for foreign key columns
pub fn generate_indexes(schema: &TableSchema) -> Vec<String> {
    schema
        .foreign_keys
        .iter()
        .map(|fk| {
            format!(
                "CREATE INDEX IF NOT EXISTS idx_{}_{} ON {}({})",
                schema.name, fk.column, schema.name, fk.column
            )
        })
        .collect()
}

/// Generate a parameterized INSERT for every non-id column
pub fn generate_insert(schema: &TableSchema) -> String {
    let columns = schema.column_names();
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{}", i)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        schema.name,
        columns.join(", "),
        placeholders.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::tables::{MATCHES, PLAYERS, TEAMS};

    #[test]
    fn test_generate_create_table() {
        let sql = generate_create_table(&PLAYERS);
        assert!(sql.contains("CREATE TABLE IF NOT EXISTS jugadores"));
        assert!(sql.contains("id INTEGER PRIMARY KEY AUTOINCREMENT"));
        assert!(sql.contains("nombre TEXT NOT NULL"));
        assert!(sql.contains("goles INTEGER DEFAULT 0"));
        assert!(sql.contains("FOREIGN KEY (equipo_id) REFERENCES equipos(id)"));
    }

    #[test]
    fn test_generate_indexes() {
        assert!(generate_indexes(&TEAMS).is_empty());
        let indexes = generate_indexes(&MATCHES);
        assert_eq!(indexes.len(), 2);
        assert!(indexes.iter().any(|i| i.contains("idx_partidos_equipo_local_id")));
    }

    #[test]
    fn test_generate_insert() {
        assert_eq!(
            generate_insert(&TEAMS),
            "INSERT INTO equipos (nombre, liga, pais, fundacion, estadio, capacidad) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)"
        );
    }
}
