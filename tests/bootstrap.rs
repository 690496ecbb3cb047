//! Bootstrap and render loop driven end to end through test doubles.
//!
//! The doubles stand in for the desktop (foreign top-level windows) and for
//! the winit/wgpu window, so every startup failure and the loop behavior can
//! be checked without a display.

mod common;

use std::rc::Rc;

use rstest::rstest;

use common::{CHILD_HANDLE, HostWindow, MockGraphics, MockHost, PARENT_HANDLE, Recorder};
use embedded_child::{
    ChildArgs, ChildError, ClearColor, FATAL_EXIT_CODE, Key, LoopEvent, ScreenRect, StopReason,
    embed, run,
};

const PARENT_PID: u32 = 4242;

fn parent_host() -> MockHost {
    MockHost::with_window(HostWindow::parent(
        PARENT_PID,
        ScreenRect::new(100, 100, 900, 700),
    ))
}

fn swapped() -> ClearColor {
    let mut color = ClearColor::INITIAL;
    color.swap_red_green();
    color
}

fn args() -> ChildArgs {
    ChildArgs::try_parse_from(["4242", "--frame-delay-us", "0"]).unwrap()
}

#[test]
fn test_end_to_end_scenario() {
    let host = parent_host();
    let recorder = Rc::new(Recorder::default());
    let graphics = MockGraphics::new(
        recorder.clone(),
        vec![
            vec![],
            vec![LoopEvent::KeyDown(Key::Space)],
            vec![LoopEvent::Quit],
        ],
    );

    let summary = run(&host, &args(), graphics.factory()).unwrap();

    let created = recorder.created.borrow();
    assert_eq!(created.len(), 1);
    assert_eq!((created[0].width, created[0].height), (800, 600));
    assert!(!created[0].decorations);

    assert_eq!(
        *host.reparented.borrow(),
        vec![(CHILD_HANDLE, PARENT_HANDLE)]
    );

    assert_eq!(
        *recorder.presented.borrow(),
        vec![ClearColor::INITIAL, swapped()]
    );
    assert_eq!(summary.reason, StopReason::Quit);
    assert_eq!(summary.frames_presented, 2);
    assert!(recorder.shut_down.get());
}

#[rstest]
#[case(ScreenRect::new(100, 100, 900, 700), (800, 600))]
#[case(ScreenRect::new(-50, -20, 270, 220), (320, 240))]
#[case(ScreenRect::new(0, 0, 1920, 1080), (1920, 1080))]
fn test_window_matches_parent_rect(#[case] rect: ScreenRect, #[case] expected: (u32, u32)) {
    let host = MockHost::with_window(HostWindow::parent(PARENT_PID, rect));
    let recorder = Rc::new(Recorder::default());
    let graphics = MockGraphics::new(recorder.clone(), vec![]);

    let (_surface, embedding) = embed(&host, &args(), graphics.factory()).unwrap();

    assert_eq!(embedding.parent_rect, rect);
    assert_eq!(embedding.parent.handle(), PARENT_HANDLE);
    assert_eq!(embedding.child, CHILD_HANDLE);
    let created = recorder.created.borrow();
    assert_eq!((created[0].width, created[0].height), expected);
}

#[test]
fn test_missing_parent_window_creates_nothing() {
    let host = MockHost::empty();
    let recorder = Rc::new(Recorder::default());
    let graphics = MockGraphics::new(recorder.clone(), vec![]);

    let err = run(&host, &args(), graphics.factory()).unwrap_err();

    assert_eq!(
        err,
        ChildError::ParentWindowNotFound {
            class: "Parent".to_string(),
            pid: PARENT_PID
        }
    );
    assert_eq!(err.exit_code(), FATAL_EXIT_CODE);
    assert_eq!(recorder.init_calls.get(), 0);
    assert!(recorder.created.borrow().is_empty());
}

#[test]
fn test_pid_mismatch_creates_nothing() {
    let host = MockHost::with_window(HostWindow::parent(99, ScreenRect::new(0, 0, 10, 10)));
    let recorder = Rc::new(Recorder::default());
    let graphics = MockGraphics::new(recorder.clone(), vec![]);

    let err = run(&host, &args(), graphics.factory()).unwrap_err();

    assert_eq!(err.to_string(), "Unable to find parent window with PID 4242");
    assert_eq!(err.exit_code(), FATAL_EXIT_CODE);
    assert_eq!(recorder.init_calls.get(), 0);
}

#[test]
fn test_wrong_class_is_not_found() {
    let mut window = HostWindow::parent(PARENT_PID, ScreenRect::new(0, 0, 10, 10));
    window.class = "Notepad".to_string();
    let host = MockHost::with_window(window);
    let recorder = Rc::new(Recorder::default());

    let err = run(
        &host,
        &args(),
        MockGraphics::new(recorder.clone(), vec![]).factory(),
    )
    .unwrap_err();

    assert!(matches!(err, ChildError::ParentWindowNotFound { .. }));
}

#[test]
fn test_custom_parent_class() {
    let mut window = HostWindow::parent(PARENT_PID, ScreenRect::new(0, 0, 640, 480));
    window.class = "HostFrame".to_string();
    let host = MockHost::with_window(window);
    let recorder = Rc::new(Recorder::default());
    let args = args().with_parent_class("HostFrame");

    let (_surface, embedding) = embed(
        &host,
        &args,
        MockGraphics::new(recorder.clone(), vec![]).factory(),
    )
    .unwrap();

    assert_eq!(embedding.parent.pid(), PARENT_PID);
}

#[test]
fn test_rect_failure_is_fatal_before_graphics() {
    let mut host = parent_host();
    host.rect_error = Some("Invalid window handle.".to_string());
    let recorder = Rc::new(Recorder::default());

    let err = run(
        &host,
        &args(),
        MockGraphics::new(recorder.clone(), vec![]).factory(),
    )
    .unwrap_err();

    assert_eq!(err, ChildError::WindowRect("Invalid window handle.".to_string()));
    assert_eq!(recorder.init_calls.get(), 0);
}

#[test]
fn test_graphics_init_failure() {
    let host = parent_host();

    let err = run(&host, &args(), || -> Result<MockGraphics, ChildError> {
        Err(ChildError::GraphicsInit("no display".to_string()))
    })
    .unwrap_err();

    assert_eq!(err.to_string(), "Failed to initialize graphics: no display");
    assert!(host.reparented.borrow().is_empty());
}

#[test]
fn test_window_creation_failure() {
    let host = parent_host();
    let recorder = Rc::new(Recorder::default());
    let mut graphics = MockGraphics::new(recorder.clone(), vec![]);
    graphics.create_error = Some(ChildError::WindowCreation("out of handles".to_string()));

    let err = run(&host, &args(), graphics.factory()).unwrap_err();

    assert!(matches!(err, ChildError::WindowCreation(_)));
    assert!(host.reparented.borrow().is_empty());
    assert!(recorder.presented.borrow().is_empty());
}

#[rstest]
#[case(ChildError::UnexpectedWindowingBackend("Xlib".to_string()))]
#[case(ChildError::NativeHandleUnavailable("window destroyed".to_string()))]
fn test_native_handle_failure(#[case] error: ChildError) {
    let host = parent_host();
    let recorder = Rc::new(Recorder::default());
    let mut graphics = MockGraphics::new(recorder.clone(), vec![]);
    graphics.handle = Err(error.clone());

    let err = run(&host, &args(), graphics.factory()).unwrap_err();

    assert_eq!(err, error);
    assert_eq!(err.exit_code(), FATAL_EXIT_CODE);
    assert!(host.reparented.borrow().is_empty());
    assert!(recorder.presented.borrow().is_empty());
}

#[test]
fn test_reparent_failure_never_renders() {
    let mut host = parent_host();
    host.reparent_error = Some("Access is denied.".to_string());
    let recorder = Rc::new(Recorder::default());

    let err = run(
        &host,
        &args(),
        MockGraphics::new(recorder.clone(), vec![vec![]]).factory(),
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "Access is denied.");
    assert!(recorder.presented.borrow().is_empty());
}

#[test]
fn test_quit_in_first_poll_renders_nothing() {
    let host = parent_host();
    let recorder = Rc::new(Recorder::default());

    let summary = run(
        &host,
        &args(),
        MockGraphics::new(recorder.clone(), vec![vec![LoopEvent::Quit]]).factory(),
    )
    .unwrap();

    assert_eq!(summary.frames_presented, 0);
    assert!(recorder.presented.borrow().is_empty());
    assert!(recorder.shut_down.get());
}

#[test]
fn test_two_space_presses_restore_color() {
    let host = parent_host();
    let recorder = Rc::new(Recorder::default());
    let space = LoopEvent::KeyDown(Key::Space);

    let summary = run(
        &host,
        &args(),
        MockGraphics::new(recorder.clone(), vec![vec![space], vec![space], vec![LoopEvent::Quit]])
            .factory(),
    )
    .unwrap();

    let presented = recorder.presented.borrow();
    assert_eq!(presented[0], swapped());
    assert_eq!(presented[1], ClearColor::INITIAL);
    assert_eq!(summary.final_color, ClearColor::INITIAL);
}

#[test]
fn test_max_frames_exits_cleanly() {
    let host = parent_host();
    let recorder = Rc::new(Recorder::default());
    let args = args().with_max_frames(5);

    let summary = run(
        &host,
        &args,
        MockGraphics::new(recorder.clone(), vec![]).factory(),
    )
    .unwrap();

    assert_eq!(summary.reason, StopReason::FrameLimit);
    assert_eq!(recorder.presented.borrow().len(), 5);
    assert!(recorder.shut_down.get());
}

#[test]
fn test_zero_max_frames_presents_nothing() {
    let host = parent_host();
    let recorder = Rc::new(Recorder::default());
    let args = ChildArgs::try_parse_from([
        "child",
        "4242",
        "--max-frames",
        "0",
        "--frame-delay-us",
        "0",
    ])
    .unwrap();

    let summary = run(
        &host,
        &args,
        MockGraphics::new(recorder.clone(), vec![]).factory(),
    )
    .unwrap();

    assert_eq!(summary.reason, StopReason::FrameLimit);
    assert_eq!(summary.frames_presented, 0);
    assert!(recorder.presented.borrow().is_empty());
    assert!(recorder.shut_down.get());
}

#[test]
fn test_vsync_flag_reaches_surface_spec() {
    let host = parent_host();
    let recorder = Rc::new(Recorder::default());
    let args = ChildArgs::try_parse_from(["child", "4242", "--no-vsync"]).unwrap();

    let _ = embed(
        &host,
        &args,
        MockGraphics::new(recorder.clone(), vec![]).factory(),
    )
    .unwrap();

    assert!(!recorder.created.borrow()[0].vsync);
}
