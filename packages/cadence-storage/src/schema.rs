pub const SCHEMA_SQL: &str = "\
CREATE TABLE IF NOT EXISTS songs (
	song_id text PRIMARY KEY,
	title text,
	artist text,
	album text,
	genre text,
	lyrics text,
	description text,
	tags text[] NOT NULL DEFAULT '{}',
	release_year integer
);
CREATE INDEX IF NOT EXISTS songs_artist_idx ON songs (artist)";

pub fn statements() -> impl Iterator<Item = &'static str> {
	SCHEMA_SQL.split(';').map(str::trim).filter(|statement| !statement.is_empty())
}
