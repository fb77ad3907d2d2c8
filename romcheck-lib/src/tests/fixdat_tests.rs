use super::*;

use romcheck_dat::DatRom;

use crate::candidate::RomWithFiles;

fn sample_dat() -> DatFile {
    let header = DatHeader {
        name: "Test".into(),
        version: "2024-01-01".into(),
        ..Default::default()
    };
    DatFile::new(
        header,
        vec![
            DatGame::new("GameA")
                .with_rom(DatRom::new("a1.bin", 16, "000000a1"))
                .with_rom(DatRom::new("a2.bin", 16, "000000a2")),
            DatGame::new("GameB")
                .with_rom(DatRom::new("b1.bin", 16, "000000b1"))
                .with_rom(DatRom::new("b2.bin", 16, "000000b2")),
            DatGame::new("GameC"),
        ],
    )
}

fn candidate(game: &DatGame, n: usize) -> WriteCandidate {
    let roms = game
        .roms
        .iter()
        .take(n)
        .map(|r| RomWithFiles::new(r.clone(), format!("/in/{}", r.name)))
        .collect();
    WriteCandidate::new(game.clone(), roms)
}

fn fixdat_options(dir: &std::path::Path) -> ReportOptions {
    ReportOptions {
        fixdat: true,
        fixdat_dir: dir.to_path_buf(),
        ..Default::default()
    }
}

fn names(games: &[&DatGame]) -> Vec<String> {
    games.iter().map(|g| g.name.clone()).collect()
}

#[test]
fn test_missing_games_partial_and_absent() {
    let dat = sample_dat();
    let candidates = vec![candidate(&dat.games[0], 2), candidate(&dat.games[1], 1)];
    assert_eq!(names(&missing_games(&dat, &candidates)), vec!["GameB"]);

    // Without any candidates everything with ROMs is missing
    assert_eq!(names(&missing_games(&dat, &[])), vec!["GameA", "GameB"]);
}

#[test]
fn test_later_candidates_resolve_roms() {
    let dat = sample_dat();
    let b = &dat.games[1];
    let first = candidate(b, 1);
    let second = WriteCandidate::new(
        b.clone(),
        vec![RomWithFiles::new(b.roms[1].clone(), "/in/other.zip")],
    );
    let candidates = vec![candidate(&dat.games[0], 2), first, second];
    assert!(missing_games(&dat, &candidates).is_empty());
}

#[test]
fn test_build_fixdat_header() {
    let dat = sample_dat();
    let candidates = vec![candidate(&dat.games[0], 2)];
    let fixdat = build_fixdat(&dat, &candidates).unwrap();

    assert_eq!(fixdat.header.name, "fixdat");
    assert_eq!(fixdat.header.description, "Test fixdat");
    assert_eq!(fixdat.header.author, "romcheck");
    assert!(!fixdat.header.version.is_empty());
    let source = fixdat.header.source.as_deref().unwrap();
    assert_eq!(source.name, "Test");
    assert_eq!(source.version, "2024-01-01");

    assert_eq!(fixdat.games.len(), 1);
    assert_eq!(fixdat.games[0], dat.games[1]);
}

#[test]
fn test_build_fixdat_nothing_missing() {
    let dat = sample_dat();
    let candidates = vec![candidate(&dat.games[0], 2), candidate(&dat.games[1], 2)];
    assert!(build_fixdat(&dat, &candidates).is_none());
}

#[tokio::test]
async fn test_generate_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let options = ReportOptions {
        fixdat: false,
        fixdat_dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    let result = generate_fixdat(&sample_dat(), &[], &options).await.unwrap();
    assert!(result.is_none());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_generate_nothing_missing_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("fixdats");
    let dat = sample_dat();
    let candidates = vec![candidate(&dat.games[0], 2), candidate(&dat.games[1], 2)];

    let result = generate_fixdat(&dat, &candidates, &fixdat_options(&out))
        .await
        .unwrap();
    assert!(result.is_none());
    assert!(!out.exists());
}

#[tokio::test]
async fn test_generate_writes_missing_games() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("fixdats");
    let dat = sample_dat();
    let candidates = vec![candidate(&dat.games[0], 2), candidate(&dat.games[1], 1)];

    let path = generate_fixdat(&dat, &candidates, &fixdat_options(&out))
        .await
        .unwrap()
        .unwrap();

    assert!(path.starts_with(&out));
    let file_name = path.file_name().unwrap().to_str().unwrap();
    assert!(file_name.starts_with("Test fixdat ("), "{file_name}");
    assert!(file_name.ends_with(").dat"), "{file_name}");

    let xml = std::fs::read_to_string(&path).unwrap();
    let parsed = romcheck_dat::parse_dat(xml.as_bytes()).unwrap();
    assert_eq!(parsed.header.name, "fixdat");
    assert_eq!(parsed.header.description, "Test fixdat");
    assert!(parsed.header.comment.contains("Test (2024-01-01)"));
    assert_eq!(parsed.games.len(), 1);
    assert_eq!(parsed.games[0].name, "GameB");
    assert_eq!(parsed.games[0].roms, dat.games[1].roms);
}

#[tokio::test]
async fn test_generate_into_existing_dir() {
    let dir = tempfile::tempdir().unwrap();
    let dat = sample_dat();

    let path = generate_fixdat(&dat, &[], &fixdat_options(dir.path()))
        .await
        .unwrap()
        .unwrap();
    let parsed = romcheck_dat::parse_dat_file(&path).unwrap();
    let game_names: Vec<&str> = parsed.games.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(game_names, vec!["GameA", "GameB"]);
}

#[tokio::test]
async fn test_generate_unwritable_dir_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"file").unwrap();

    let result = generate_fixdat(&sample_dat(), &[], &fixdat_options(&blocker.join("sub"))).await;
    assert!(matches!(result, Err(ReportError::Io(_))));
}
