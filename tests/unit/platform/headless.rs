use super::*;

#[test]
fn null_assets_issue_distinct_handles_and_fail_missing_paths() {
    let mut assets = NullAssets::new().with_missing("gone.png");
    let a = assets.load_texture("a.png").unwrap();
    let b = assets.load_texture("b.png").unwrap();
    assert_ne!(a, b);
    let err = assets.load_texture("gone.png").unwrap_err();
    assert!(err.to_string().contains("gone.png"));
    assert!(!err.is_lookup());
}

#[test]
fn null_audio_counts_plays_and_tracks_pause() {
    let mut audio = NullAudio::new();
    let ch = audio.play(SoundHandle(4), 0, true).unwrap();
    assert_eq!(ch, ChannelId(0));
    audio.set_paused(true);
    assert!(audio.is_paused());
    assert_eq!(audio.played(), &[SoundHandle(4)]);
}

#[test]
fn headless_window_remembers_cursor() {
    let mut w = HeadlessWindow::new(Canvas::new(320, 240).unwrap());
    assert_eq!(w.size().width, 320);
    w.set_cursor(CursorKind::Pointer);
    assert_eq!(w.cursor(), CursorKind::Pointer);
}
