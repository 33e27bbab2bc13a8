//! Scripted tour of the sheet core: presents a sheet, drags it between its
//! detents, hands scrolling off to the embedded scrollable, and runs the
//! top-bounce momentum transfer — all against a manual clock, printing the
//! interesting state along the way.

use std::rc::Rc;

use shoji_core::{ManualClock, PanSample, Size};
use shoji_sheet::{
    ContentScrollState, HeightPolicy, LayoutEnv, SheetConfig, SheetController, SheetHooks,
};
use web_time::Duration;

fn settle(sheet: &SheetController, clock: &ManualClock) {
    while sheet.is_animating() {
        clock.advance(Duration::from_millis(16));
        sheet.tick();
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let clock = Rc::new(ManualClock::new());

    let config = SheetConfig {
        short_form_height: HeightPolicy::ContentHeight(320.0),
        long_form_height: HeightPolicy::ContentHeight(640.0),
        allows_extended_pan_scrolling: true,
        content_is_scrollable: true,
        ..Default::default()
    };

    let hooks = SheetHooks {
        will_transition: Rc::new(|state| log::info!("will transition to {state:?}")),
        will_dismiss: Rc::new(|| log::info!("sheet will dismiss")),
        did_dismiss: Rc::new(|| log::info!("sheet did dismiss")),
        request_dismiss: Rc::new(|| log::info!("core asked the host to dismiss")),
        haptic: Rc::new(|| log::info!("haptic tick")),
        ..Default::default()
    };

    let sheet = SheetController::new_with_clock(config, hooks, clock.clone());

    sheet.set_environment(LayoutEnv {
        container: Size::new(390.0, 844.0),
        top_inset: 47.0,
        bottom_inset: 34.0,
        ..Default::default()
    });
    let anchors = sheet.anchors().expect("layout ran");
    log::info!(
        "anchors: short {} / long {} / ceiling {}",
        anchors.short_form_y,
        anchors.long_form_y,
        anchors.anchored_y
    );

    let scrollable = Rc::new(ContentScrollState::new());
    sheet.set_scrollable(Some(scrollable.clone()));

    sheet.present(true);
    settle(&sheet, &clock);
    sheet.finish_presentation();
    log::info!("presented at y = {:.1}, dim = {:?}", sheet.position(), sheet.dim_state());

    // Flick up to long form.
    sheet.handle_pan(PanSample::began());
    for _ in 0..6 {
        sheet.handle_pan(PanSample::changed(-18.0));
    }
    sheet.handle_pan(PanSample::ended(-420.0));
    settle(&sheet, &clock);
    log::info!(
        "after flick: y = {:.1}, state = {:?}, anchored = {}",
        sheet.position(),
        sheet.presentation_state(),
        sheet.is_anchored()
    );

    // The sheet is anchored; content scrolling is tracked normally.
    scrollable.set_dragging(true);
    scrollable.set_content_offset(36.0);
    scrollable.set_content_offset(72.0);
    log::info!("content scrolled to {}", scrollable.content_offset());

    // Fast downward scroll back to the top rubber-bands into the sheet.
    scrollable.set_content_offset(0.0);
    scrollable.set_dragging(false);
    scrollable.set_decelerating(true);
    for offset in [-6.0, -14.0, -9.0] {
        scrollable.set_content_offset(offset);
    }
    settle(&sheet, &clock);
    scrollable.set_decelerating(false);
    log::info!("after top bounce: y = {:.1}", sheet.position());

    // Slow drag down past short form and let go near the bottom.
    sheet.handle_pan(PanSample::began());
    for _ in 0..12 {
        sheet.handle_pan(PanSample::changed(28.0));
    }
    sheet.handle_pan(PanSample::ended(120.0));
    settle(&sheet, &clock);
    log::info!(
        "after slow drag: y = {:.1}, state = {:?}",
        sheet.position(),
        sheet.presentation_state()
    );

    sheet.begin_dismissal(true);
    settle(&sheet, &clock);
    sheet.finish_dismissal();
    log::info!("done, sheet parked at y = {:.1}", sheet.position());
}
