use falling_2048::core::{GameConfig, GameSnapshot, GameState};
use falling_2048::term::palette::tile_color;
use falling_2048::term::{AnchorY, FrameBuffer, GameView, Viewport};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSnapshot::default();
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    // 6 columns of 7 chars and 7 rows of 3 lines, plus the border => 44x23.
    let fb = view.render(&snap, Viewport::new(44, 24));

    assert_eq!(fb.get(0, 0).unwrap().ch, '╭');
    assert_eq!(fb.get(43, 0).unwrap().ch, '╮');
    assert_eq!(fb.get(0, 22).unwrap().ch, '╰');
    assert_eq!(fb.get(43, 22).unwrap().ch, '╯');
}

#[test]
fn term_view_draws_tile_value_on_its_color() {
    let mut snap = GameSnapshot::default();
    snap.grid.set(6, 0, 2048).unwrap();

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(44, 24));

    // Cell (6, 0) starts at (1, 1 + 6 * 3); the number sits on its middle line,
    // centered in the 6-wide face.
    let (x0, y0) = (1, 19);
    let mid = y0 + 1;
    let digits: String = (x0 + 1..x0 + 5)
        .map(|x| fb.get(x, mid).unwrap().ch)
        .collect();
    assert_eq!(digits, "2048");
    assert_eq!(fb.get(x0, y0).unwrap().style.bg, tile_color(2048));
    assert_eq!(fb.get(x0 + 5, y0 + 2).unwrap().style.bg, tile_color(2048));
}

#[test]
fn term_view_renders_large_values() {
    let mut snap = GameSnapshot::default();
    snap.grid.set(6, 5, 65536).unwrap();

    let fb = GameView::default().render(&snap, Viewport::new(44, 24));
    assert!(screen_text(&fb).contains("65536"));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut game = GameState::new(GameConfig::default(), 1);
    game.start();
    let mut snap = game.snapshot();
    snap.score = 1234;
    snap.level = 2;

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(70, 24));
    let all = screen_text(&fb);

    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("LEVEL"));
    assert!(all.contains("NEXT"));
    assert!(all.contains("600ms"));
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let snap = GameSnapshot::default();
    let fb = GameView::default().render(&snap, Viewport::new(44, 24));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let mut snap = GameSnapshot::default();
    snap.game_over = true;
    snap.score = 96;
    snap.level = 1;

    let fb = GameView::default().render(&snap, Viewport::new(80, 30));
    let all = screen_text(&fb);
    assert!(all.contains("GAME OVER"));
    assert!(all.contains("Final Score: 96"));
    assert!(all.contains("Press R to restart"));
}

#[test]
fn term_view_reuses_framebuffer_across_sizes() {
    let snap = GameSnapshot::default();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&snap, Viewport::new(80, 30), &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 30));

    view.render_into(&snap, Viewport::new(50, 25), &mut fb);
    assert_eq!((fb.width(), fb.height()), (50, 25));
    assert_eq!(fb, view.render(&snap, Viewport::new(50, 25)));
}
