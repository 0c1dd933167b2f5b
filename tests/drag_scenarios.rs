use chrono::{NaiveDate, NaiveDateTime};
use gantt_timeline::{
    drag_task, to_date_interval, to_pixel_interval, CoordinateMapper, DateInterval, EngineConfig,
    PixelInterval, Task, TimelineWindow, ViewMode,
};

fn at(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32, ms: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_milli_opt(h, mi, s, ms)
        .unwrap()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
    at(y, m, d, 0, 0, 0, 0)
}

fn january_days() -> TimelineWindow {
    TimelineWindow::try_new(day(2024, 1, 1), day(2024, 1, 31), 30, 150.0, ViewMode::Day).unwrap()
}

#[test]
fn dragging_day_bar_snaps_to_whole_days() {
    let window = january_days();
    let interval = to_date_interval(PixelInterval::new(300.0, 450.0), &window);

    assert_eq!(interval.start, day(2024, 1, 3));
    assert_eq!(interval.end, at(2024, 1, 5, 23, 59, 59, 999));
}

#[test]
fn drag_returns_new_task_value() {
    let window = january_days();
    let task = Task::new("Build", day(2024, 1, 1), at(2024, 1, 1, 23, 59, 59, 999));

    let moved = drag_task(&task, PixelInterval::new(300.0, 450.0), &window);

    assert_eq!(moved.id, task.id);
    assert_eq!(moved.name, "Build");
    assert_eq!(moved.start, day(2024, 1, 3));
    assert_eq!(task.start, day(2024, 1, 1));
}

#[test]
fn week_bar_width_snaps_to_one_day() {
    // 140px per week column is 20px per day.
    let window =
        TimelineWindow::try_new(day(2024, 1, 1), day(2024, 3, 11), 10, 140.0, ViewMode::Week)
            .unwrap();
    let one_day = DateInterval::new(day(2024, 1, 2), at(2024, 1, 2, 23, 59, 59, 999));

    let pixel = to_pixel_interval(one_day, &window);

    assert_eq!(pixel.left, 20.0);
    assert_eq!(pixel.width, 20.0);

    let back = to_date_interval(pixel, &window);
    assert_eq!(back, one_day);
}

#[test]
fn week_drag_snaps_to_day_quantum() {
    let window =
        TimelineWindow::try_new(day(2024, 1, 1), day(2024, 3, 11), 10, 140.0, ViewMode::Week)
            .unwrap();
    let interval = to_date_interval(PixelInterval::new(47.0, 52.0), &window);
    assert_eq!(interval.start, day(2024, 1, 3));
    assert_eq!(interval.end, at(2024, 1, 5, 23, 59, 59, 999));
}

#[test]
fn output_stays_inside_window_for_any_pixels() {
    let lefts = [-500.0, -1.0, 0.0, 149.0, 2000.0, 4499.0, 4500.0, 9000.0, f64::NAN, f64::INFINITY];
    let widths = [-10.0, 0.0, 1.0, 150.0, 3000.0, 10_000.0, f64::NAN];

    for mode in ViewMode::ALL {
        let window =
            TimelineWindow::try_new(day(2024, 1, 1), day(2024, 1, 31), 30, 150.0, mode).unwrap();
        for &left in &lefts {
            for &width in &widths {
                let interval = to_date_interval(PixelInterval::new(left, width), &window);
                assert!(window.start <= interval.start, "{mode} {left} {width}");
                assert!(interval.start <= interval.end, "{mode} {left} {width}");
                assert!(interval.end <= window.end, "{mode} {left} {width}");
            }
        }
    }
}

#[test]
fn pixel_width_never_below_minimum() {
    let tasks = [
        DateInterval::new(day(2024, 1, 5), day(2024, 1, 5)),
        DateInterval::new(at(2024, 1, 5, 3, 0, 0, 0), at(2024, 1, 5, 3, 0, 1, 0)),
        DateInterval::new(day(2023, 6, 1), day(2023, 6, 2)),
        DateInterval::new(day(2024, 1, 30), day(2024, 3, 1)),
        DateInterval::new(day(2024, 1, 2), day(2024, 1, 20)),
    ];
    for mode in ViewMode::ALL {
        let window =
            TimelineWindow::try_new(day(2024, 1, 1), day(2024, 1, 31), 30, 150.0, mode).unwrap();
        let min = gantt_timeline::granularity::min_pixel_width(mode);
        for task in tasks {
            let pixel = to_pixel_interval(task, &window);
            assert!(pixel.width >= min, "{mode}: {pixel:?}");
            assert!(pixel.left >= 0.0);
            assert!(pixel.right() <= window.total_width() + 1e-9, "{mode}: {pixel:?}");
        }
    }
}

#[test]
fn fixed_modes_round_trip_within_one_quantum() {
    let cases = [
        (ViewMode::Minute, day(2024, 1, 1), 120, 40.0, 60_000_i64),
        (ViewMode::Hour, day(2024, 1, 1), 48, 60.0, 3_600_000),
        (ViewMode::Day, day(2024, 1, 1), 30, 150.0, 86_400_000),
        (ViewMode::Week, day(2024, 1, 1), 12, 140.0, 86_400_000),
    ];

    for (mode, start, units, width, quantum_ms) in cases {
        let unit_ms = gantt_timeline::granularity::unit_duration_ms(mode).unwrap();
        let end = gantt_timeline::time::shift_ms(start, unit_ms * units).unwrap();
        let window = TimelineWindow::try_new(start, end, units as u32, width, mode).unwrap();
        let strategy = mode.strategy();

        for (from, len) in [(0_i64, 1_i64), (3, 2), (7, 5), (10, 1)] {
            let task_start =
                gantt_timeline::time::shift_ms(start, from * quantum_ms + quantum_ms / 3).unwrap();
            let task_end = gantt_timeline::time::shift_ms(task_start, len * quantum_ms - 1).unwrap();
            let task = DateInterval::new(task_start, task_end);
            let snapped_start = strategy.normalize_start(task.start);
            let snapped_end = strategy.normalize_end(task.end);

            let back = to_date_interval(to_pixel_interval(task, &window), &window);

            let start_drift = gantt_timeline::time::elapsed_ms(snapped_start, back.start).abs();
            let end_drift = gantt_timeline::time::elapsed_ms(snapped_end, back.end).abs();
            assert!(start_drift < quantum_ms, "{mode}: {task:?} -> {back:?}");
            assert!(end_drift < quantum_ms, "{mode}: {task:?} -> {back:?}");
        }
    }
}

#[test]
fn calendar_modes_use_literal_window_span() {
    // Q1 2024 = 91 days across three 91px month columns: 3px per day.
    let window =
        TimelineWindow::try_new(day(2024, 1, 1), day(2024, 4, 1), 3, 91.0, ViewMode::Month)
            .unwrap();
    let february = DateInterval::new(day(2024, 2, 1), at(2024, 2, 29, 23, 59, 59, 999));

    let pixel = to_pixel_interval(february, &window);
    assert!((pixel.left - 93.0).abs() < 1e-6);
    assert!((pixel.width - 87.0).abs() < 1e-6);

    let back = to_date_interval(pixel, &window);
    assert_eq!(back, february);
}

#[test]
fn task_bar_placement_respects_configured_minimum() {
    let window = january_days();
    let launch = Task::new_milestone("Launch", day(2024, 1, 4));

    let default_bar = CoordinateMapper::default().pixel_interval_for_task(&launch, &window);
    assert_eq!(default_bar, PixelInterval::new(450.0, 150.0));

    let mut config = EngineConfig::default();
    config.min_width_overrides.insert(ViewMode::Day, 200.0);
    let wide_bar = CoordinateMapper::new(config).pixel_interval_for_task(&launch, &window);
    assert_eq!(wide_bar, PixelInterval::new(450.0, 200.0));
}

#[test]
fn only_grid_modes_have_fixed_duration() {
    for mode in ViewMode::ALL {
        let fixed = matches!(
            mode,
            ViewMode::Minute | ViewMode::Hour | ViewMode::Day | ViewMode::Week
        );
        assert_eq!(mode.is_fixed_duration(), fixed, "{mode}");
    }
}
