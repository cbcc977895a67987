use super::*;

const TEST_PARAMS: &[ParamSpec] = &[
    ParamSpec {
        name: "time",
        kind: ParamKind::Float,
    },
    ParamSpec {
        name: "amplitude",
        kind: ParamKind::FloatArray(8),
    },
];

fn test_program_desc() -> ProgramDesc {
    ProgramDesc {
        name: "test_program",
        vertex_source: "",
        fragment_source: "",
        params: TEST_PARAMS,
    }
}

#[test]
fn test_program_stores_declared_params() {
    let mut device = MockDevice::new();
    let programs = device.programs();
    let program = device.create_program(&test_program_desc()).unwrap();

    program.set_float("time", 1.5);
    let mock = find_program(&programs, "test_program").unwrap();
    assert_eq!(mock.value("time"), Some(ParamValue::Float(1.5)));
    assert_eq!(mock.ignored_count(), 0);
}

#[test]
fn test_program_ignores_undeclared_params() {
    let mut device = MockDevice::new();
    let programs = device.programs();
    let program = device.create_program(&test_program_desc()).unwrap();

    program.set_float("no_such_param", 1.0);
    program.set_int("time", 3); // declared as Float, not Int

    let mock = find_program(&programs, "test_program").unwrap();
    assert_eq!(mock.value("no_such_param"), None);
    assert_eq!(mock.value("time"), None);
    assert_eq!(mock.ignored_count(), 2);
}

#[test]
fn test_float_array_length_must_match() {
    let mut device = MockDevice::new();
    let programs = device.programs();
    let program = device.create_program(&test_program_desc()).unwrap();

    program.set_float_array("amplitude", &[0.0; 8]);
    program.set_float_array("amplitude", &[0.0; 4]);

    let mock = find_program(&programs, "test_program").unwrap();
    assert_eq!(mock.value("amplitude"), Some(ParamValue::FloatArray(vec![0.0; 8])));
    assert_eq!(mock.ignored_count(), 1);
}

#[test]
fn test_uniform_block_write_and_readback() {
    let mut device = MockDevice::new();
    let block = device
        .create_uniform_block(&UniformBlockDesc {
            size: 16,
            label: "test_block",
        })
        .unwrap();

    block.write(4, &[1, 2, 3, 4]).unwrap();
    let contents = block.contents().unwrap();
    assert_eq!(&contents[4..8], &[1, 2, 3, 4]);
    assert!(device.log().contains("uniform_write test_block offset=4 len=4"));
}

#[test]
fn test_uniform_block_rejects_out_of_bounds_write() {
    let mut device = MockDevice::new();
    let block = device
        .create_uniform_block(&UniformBlockDesc {
            size: 8,
            label: "small_block",
        })
        .unwrap();

    assert!(block.write(4, &[0u8; 8]).is_err());
}

#[test]
fn test_target_release_is_logged_on_drop() {
    let mut device = MockDevice::new();
    let log = device.log();
    let target = device
        .create_target(&TargetDesc {
            width: 64,
            height: 64,
            attachments: AttachmentFlags::COLOR,
            label: "scratch",
        })
        .unwrap();

    assert!(!log.contains("release_target scratch"));
    drop(target);
    assert!(log.contains("release_target scratch"));
}

#[test]
fn test_target_creation_failure_injection() {
    let mut device = MockDevice::new();
    device.fail_target_creation();
    let result = device.create_target(&TargetDesc {
        width: 64,
        height: 64,
        attachments: AttachmentFlags::COLOR,
        label: "doomed",
    });
    assert!(result.is_err());
}

#[test]
fn test_commands_record_in_order() {
    let mut device = MockDevice::new();
    let log = device.log();
    let mesh = device.create_mesh("tri", &MeshData::default()).unwrap();

    let mut commands = device.begin_frame().unwrap();
    commands.set_viewport(Viewport::full(800, 600));
    commands.begin_target(None, ClearOps::scene_default());
    commands.draw_mesh(&mesh);
    commands.end_target();
    device.end_frame(commands).unwrap();

    let events = log.snapshot();
    let begin = log.index_of("begin_target surface").unwrap();
    let draw = log.index_of("draw_mesh tri").unwrap();
    let end = log.index_of("end_target").unwrap();
    assert!(begin < draw && draw < end);
    assert_eq!(events.last().unwrap(), "end_frame");
}

#[test]
fn test_pick_result_requires_matching_draw() {
    let mut device = MockDevice::new();
    device.push_pick_result(2);
    let mesh = device.create_mesh("marker", &MeshData::default()).unwrap();

    let mut commands = device.begin_frame().unwrap();
    commands.begin_pick(PickRegion {
        x: 100,
        y: 100,
        width: 5,
        height: 5,
    });
    commands.pick_draw(1, &mesh, &Mat4::IDENTITY);
    commands.pick_draw(2, &mesh, &Mat4::IDENTITY);
    let hit = commands.end_pick().unwrap();
    assert_eq!(hit, Some(2));
}

#[test]
fn test_pick_with_no_draws_misses() {
    let mut device = MockDevice::new();
    device.push_pick_result(7);
    let mut commands = device.begin_frame().unwrap();
    commands.begin_pick(PickRegion {
        x: 0,
        y: 0,
        width: 5,
        height: 5,
    });
    let hit = commands.end_pick().unwrap();
    assert_eq!(hit, None);
}

#[test]
fn test_pick_with_no_configured_result_misses() {
    let mut device = MockDevice::new();
    let mesh = device.create_mesh("marker", &MeshData::default()).unwrap();
    let mut commands = device.begin_frame().unwrap();
    commands.begin_pick(PickRegion {
        x: 0,
        y: 0,
        width: 5,
        height: 5,
    });
    commands.pick_draw(1, &mesh, &Mat4::IDENTITY);
    let hit = commands.end_pick().unwrap();
    assert_eq!(hit, None);
}
