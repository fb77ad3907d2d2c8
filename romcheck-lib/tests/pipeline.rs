use std::path::PathBuf;

use romcheck_dat::{DatFile, parse_dat};
use romcheck_lib::manifest::{parse_manifest, resolve_manifest};
use romcheck_lib::*;

const GB_DAT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE datafile PUBLIC "-//Logiqx//DTD ROM Management Datafile//EN" "http://www.logiqx.com/dtds/datafile.dtd">
<datafile>
	<header>
		<name>Nintendo - Game Boy</name>
		<description>Nintendo - Game Boy</description>
		<version>20240115-000000</version>
	</header>
	<game name="[BIOS] Nintendo Game Boy Boot ROM (World)" isbios="yes">
		<description>[BIOS] Nintendo Game Boy Boot ROM (World)</description>
		<rom name="gb_bios.bin" size="256" crc="59c8598e"/>
	</game>
	<game name="Tetris (World) (Rev 1)">
		<description>Tetris (World) (Rev 1)</description>
		<rom name="Tetris (World) (Rev 1).gb" size="32768" crc="46df91ad"/>
	</game>
	<game name="Pokemon - Red Version (USA, Europe)">
		<description>Pokemon - Red Version (USA, Europe)</description>
		<rom name="Pokemon - Red Version (USA, Europe).gb" size="1048576" crc="9f7fdd53"/>
		<rom name="Pokemon - Red Version (USA, Europe).sav" size="32768" crc="00000001"/>
	</game>
	<game name="Alleyway (World) (Beta)">
		<description>Alleyway (World) (Beta)</description>
		<rom name="Alleyway (World) (Beta).gb" size="32768" crc="0cf2b7a1"/>
	</game>
</datafile>
"#;

const MANIFEST: &str = r#"[
    {"game": "Tetris (World) (Rev 1)", "roms": [
        {"rom": "Tetris (World) (Rev 1).gb", "input": "/roms/tetris.zip", "output": "/out/Tetris (World) (Rev 1).gb"}
    ]},
    {"game": "Pokemon - Red Version (USA, Europe)", "roms": [
        {"rom": "Pokemon - Red Version (USA, Europe).gb", "input": "/roms/pokered.gb"}
    ]}
]"#;

fn load() -> (DatFile, Vec<WriteCandidate>) {
    let dat = parse_dat(GB_DAT.as_bytes()).unwrap();
    let entries = parse_manifest(MANIFEST).unwrap();
    let candidates = resolve_manifest(&dat, &entries).unwrap();
    (dat, candidates)
}

#[test]
fn status_from_manifest() {
    let (dat, candidates) = load();
    let status = DatStatus::new(&dat, &candidates);

    assert_eq!(status.dat_name(), "Nintendo - Game Boy");
    assert_eq!(status.all_games(RomType::Games).len(), 4);
    assert_eq!(status.all_games(RomType::Bioses).len(), 1);
    assert_eq!(status.all_games(RomType::Retail).len(), 3);
    assert_eq!(status.found_games(RomType::Games).len(), 1);
    assert_eq!(status.incomplete_games(RomType::Games).len(), 1);

    let line = strip_ansi_escapes::strip_str(status.render_console(&ReportOptions::default()));
    assert_eq!(line, "1/4 games, 0/1 BIOSes, 1/3 retail releases found");

    assert_eq!(
        status.input_files(),
        vec![PathBuf::from("/roms/tetris.zip"), PathBuf::from("/roms/pokered.gb")]
    );
}

#[tokio::test]
async fn report_and_fixdat() {
    let (dat, candidates) = load();
    let dir = tempfile::tempdir().unwrap();
    let options = ReportOptions {
        write: true,
        fixdat: true,
        fixdat_dir: dir.path().join("fixdats"),
        ..Default::default()
    };

    let status = DatStatus::new(&dat, &candidates);
    let unused = vec![(GameStatus::Unused, vec![PathBuf::from("/roms/junk.txt")])];
    let csv = build_report(&[status], &unused, &options).unwrap();

    let report_path = dir.path().join("reports").join("report.csv");
    write_report(&report_path, &csv).await.unwrap();
    let written = std::fs::read_to_string(&report_path).unwrap();
    let lines: Vec<&str> = written.lines().collect();

    // header + 4 games + 1 loose file
    assert_eq!(lines.len(), 6);
    assert!(lines[1].starts_with(
        "Nintendo - Game Boy,[BIOS] Nintendo Game Boy Boot ROM (World),MISSING,,"
    ));
    assert!(lines[2].starts_with("Nintendo - Game Boy,Alleyway (World) (Beta),MISSING,,"));
    assert!(lines[3].starts_with(
        "Nintendo - Game Boy,\"Pokemon - Red Version (USA, Europe)\",INCOMPLETE,/roms/pokered.gb,"
    ));
    assert!(lines[4].starts_with(
        "Nintendo - Game Boy,Tetris (World) (Rev 1),FOUND,/out/Tetris (World) (Rev 1).gb,"
    ));
    assert!(lines[5].starts_with(",,UNUSED,/roms/junk.txt,"));

    let fixdat_path = generate_fixdat(&dat, &candidates, &options)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        fixdat_path.parent().unwrap(),
        dir.path().join("fixdats").as_path()
    );

    let fixdat = romcheck_dat::parse_dat_file(&fixdat_path).unwrap();
    let names: Vec<&str> = fixdat.games.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "[BIOS] Nintendo Game Boy Boot ROM (World)",
            "Pokemon - Red Version (USA, Europe)",
            "Alleyway (World) (Beta)",
        ]
    );
    assert!(fixdat.games[0].bios);
    assert_eq!(fixdat.header.description, "Nintendo - Game Boy fixdat");
}
