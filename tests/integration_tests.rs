//! Integration tests - play and editor sessions driven through their actions

use loopy::core::{
    Board, Editor, EditorEvent, FileStore, Game, GameEvent, GameStatus, KeyValueStore, Level,
    LevelPack, MemoryStore, Progress, CURRENT_LEVEL_KEY,
};
use loopy::types::{EditorAction, GameAction, Side, Spin};

fn ring() -> Level {
    Level::new(vec![vec![3, 10, 9], vec![5, 0, 5], vec![6, 10, 12]])
}

fn two_rings() -> LevelPack {
    LevelPack::new(vec![ring(), ring()])
}

/// Walk the cursor over every cell and turn each tile until it matches `target`.
fn solve(game: &mut Game, target: &Board) -> GameEvent {
    let mut last = GameEvent::Ignored;
    for row in 0..target.height() {
        // Back to the west edge.
        for _ in 0..target.width() {
            game.apply_action(GameAction::Move(Side::West)).unwrap();
        }
        for col in 0..target.width() {
            let want = target.get(row as i32, col as i32).unwrap();
            for _ in 0..4 {
                let have = game.board().unwrap().get(row as i32, col as i32).unwrap();
                if have == want || game.status() != GameStatus::Playing {
                    break;
                }
                last = game.apply_action(GameAction::RotateCw).unwrap();
            }
            game.apply_action(GameAction::Move(Side::East)).unwrap();
        }
        game.apply_action(GameAction::Move(Side::South)).unwrap();
    }
    last
}

#[test]
fn test_game_solve_advance_and_finish() {
    let target = ring().to_board().unwrap();
    let mut game = Game::new(two_rings(), 0, 7).unwrap();
    let mut store = MemoryStore::new();

    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(solve(&mut game, &target), GameEvent::Solved { level: 0 });
    assert_eq!(game.status(), GameStatus::Solved);
    assert!(game.board().unwrap().is_complete());

    // Rotations are frozen until the player advances.
    assert_eq!(
        game.apply_action(GameAction::RotateCcw).unwrap(),
        GameEvent::Ignored
    );

    Progress::save(&mut store, game.next_level()).unwrap();
    assert_eq!(Progress::load(&store), 1);

    assert_eq!(
        game.apply_action(GameAction::Advance).unwrap(),
        GameEvent::LevelLoaded { level: 1 }
    );
    assert_eq!(game.cursor(), (0, 0));

    assert_eq!(solve(&mut game, &target), GameEvent::Solved { level: 1 });
    assert_eq!(
        game.apply_action(GameAction::Advance).unwrap(),
        GameEvent::Finished
    );
    assert_eq!(game.status(), GameStatus::Finished);
    assert!(game.board().is_none());
    assert_eq!(game.snapshot().message.as_deref(), Some("Game complete!"));
}

#[test]
fn test_game_advance_requires_solved_board() {
    let mut game = Game::new(two_rings(), 0, 3).unwrap();
    assert!(!game.board().unwrap().is_complete());
    assert_eq!(
        game.apply_action(GameAction::Advance).unwrap(),
        GameEvent::Ignored
    );
    assert_eq!(game.level(), 0);
}

#[test]
fn test_game_resumes_past_end_as_finished() {
    let game = Game::new(two_rings(), 5, 1).unwrap();
    assert_eq!(game.status(), GameStatus::Finished);
    assert!(!game.snapshot().has_board());
}

#[test]
fn test_same_seed_scrambles_identically() {
    let a = Game::new(LevelPack::builtin(), 3, 99).unwrap();
    let b = Game::new(LevelPack::builtin(), 3, 99).unwrap();
    assert_eq!(a.board(), b.board());
}

#[test]
fn test_builtin_levels_scramble_within_orbits() {
    for (i, level) in LevelPack::builtin().iter().enumerate() {
        let solved = level.to_board().unwrap();
        let game = Game::new(LevelPack::builtin(), i, 11).unwrap();
        let scrambled = game.board().unwrap();
        for (a, b) in solved.tiles().iter().zip(scrambled.tiles()) {
            assert_eq!(a.degree(), b.degree(), "level {i}");
        }
    }
}

#[test]
fn test_progress_round_trips_through_file_store() {
    let path = std::env::temp_dir().join(format!("loopy-it-{}.json", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let mut store = FileStore::open(&path).unwrap();
    assert_eq!(Progress::load(&store), 0);
    Progress::save(&mut store, 4).unwrap();

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get(CURRENT_LEVEL_KEY).as_deref(), Some("4"));
    assert_eq!(Progress::load(&reopened), 4);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_progress_ignores_garbage() {
    let mut store = MemoryStore::new();
    store.set(CURRENT_LEVEL_KEY, "three").unwrap();
    assert_eq!(Progress::load(&store), 0);
    store.set(CURRENT_LEVEL_KEY, "-1").unwrap();
    assert_eq!(Progress::load(&store), 0);
}

#[test]
fn test_level_pack_from_json_feeds_a_game() {
    let pack = LevelPack::from_json("[[[3,10,9],[5,0,5],[6,10,12]]]").unwrap();
    assert_eq!(pack.len(), 1);
    let game = Game::new(pack, 0, 5).unwrap();
    assert_eq!(game.board().unwrap().width(), 3);

    assert!(LevelPack::from_json("[[[1,2],[3]]]").is_err());
    assert!(LevelPack::from_json("[[]]").is_err());
    assert!(LevelPack::from_json("not json").is_err());
}

#[test]
fn test_editor_builds_a_solvable_level() {
    let mut editor = Editor::new().unwrap();
    for _ in 0..4 {
        editor.apply_action(EditorAction::Shrink(Side::East)).unwrap();
        editor.apply_action(EditorAction::Shrink(Side::South)).unwrap();
    }
    // 3x3 now; the size bound stops further shrinking.
    assert_eq!(editor.board().width(), 3);
    assert!(editor.apply_action(EditorAction::Shrink(Side::West)).is_err());

    // Draw a 2x2 loop in the top-left corner.
    editor.apply_action(EditorAction::ToggleEdge(Side::East)).unwrap();
    editor.apply_action(EditorAction::ToggleEdge(Side::South)).unwrap();
    editor.apply_action(EditorAction::Move(Side::East)).unwrap();
    editor.apply_action(EditorAction::ToggleEdge(Side::South)).unwrap();
    editor.apply_action(EditorAction::Move(Side::South)).unwrap();
    editor.apply_action(EditorAction::ToggleEdge(Side::West)).unwrap();

    assert_eq!(
        editor.board().to_matrix(),
        vec![vec![3, 9, 0], vec![6, 12, 0], vec![0, 0, 0]]
    );
    assert!(editor.board().is_complete());

    let EditorEvent::Dumped(dump) = editor.apply_action(EditorAction::Dump).unwrap() else {
        panic!("expected a dump");
    };
    let level: Vec<Vec<u8>> = serde_json::from_str(&dump.replace(",\n]", "\n]")).unwrap();
    let mut board = Board::new(3, 3).unwrap();
    board.define_level(&level).unwrap();
    assert_eq!(&board, editor.board());

    board.rotate(0, 0, Spin::Clockwise, 1).unwrap();
    assert!(!board.is_complete());
}
