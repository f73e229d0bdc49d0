use cadence_domain::Song;

use crate::{Error, Result, db::Db};

#[derive(Debug, sqlx::FromRow)]
struct SongRow {
	song_id: String,
	title: Option<String>,
	artist: Option<String>,
	album: Option<String>,
	genre: Option<String>,
	lyrics: Option<String>,
	description: Option<String>,
	tags: Vec<String>,
	release_year: Option<i32>,
}
impl From<SongRow> for Song {
	fn from(row: SongRow) -> Self {
		Self {
			song_id: row.song_id,
			title: row.title,
			artist: row.artist,
			album: row.album,
			genre: row.genre,
			lyrics: row.lyrics,
			description: row.description,
			tags: row.tags,
			release_year: row.release_year,
		}
	}
}

pub async fn get_song(db: &Db, song_id: &str) -> Result<Option<Song>> {
	let row: Option<SongRow> = sqlx::query_as(
		"\
SELECT song_id, title, artist, album, genre, lyrics, description, tags, release_year
FROM songs
WHERE song_id = $1",
	)
	.bind(song_id)
	.fetch_optional(&db.pool)
	.await?;

	Ok(row.map(Song::from))
}

pub async fn upsert_song(db: &Db, song: &Song) -> Result<()> {
	if song.song_id.trim().is_empty() {
		return Err(Error::InvalidArgument("song_id must be non-empty.".to_string()));
	}

	sqlx::query(
		"\
INSERT INTO songs (
	song_id,
	title,
	artist,
	album,
	genre,
	lyrics,
	description,
	tags,
	release_year
)
VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9)
ON CONFLICT (song_id) DO UPDATE
SET
	title = EXCLUDED.title,
	artist = EXCLUDED.artist,
	album = EXCLUDED.album,
	genre = EXCLUDED.genre,
	lyrics = EXCLUDED.lyrics,
	description = EXCLUDED.description,
	tags = EXCLUDED.tags,
	release_year = EXCLUDED.release_year",
	)
	.bind(song.song_id.as_str())
	.bind(song.title.as_deref())
	.bind(song.artist.as_deref())
	.bind(song.album.as_deref())
	.bind(song.genre.as_deref())
	.bind(song.lyrics.as_deref())
	.bind(song.description.as_deref())
	.bind(&song.tags)
	.bind(song.release_year)
	.execute(&db.pool)
	.await?;

	Ok(())
}
