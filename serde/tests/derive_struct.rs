use bitstream_serde::{
    decode_packed, encode_packed, BitEnum, BitStreamCodable, FloatCompressor,
    ReadableBitStream, WritableBitStream,
};

#[derive(BitStreamCodable, Debug, PartialEq)]
struct Empty;

#[derive(BitStreamCodable, Debug, PartialEq)]
struct Pair(u16, bool);

#[derive(BitEnum, BitStreamCodable, Clone, Copy, Debug, PartialEq)]
enum Shape {
    Round,
    Square,
    Star,
}

#[derive(BitStreamCodable, Debug, PartialEq)]
struct Projectile {
    #[bitstream(bits = 4)]
    catapult_id: u8,
    shape: Shape,
    #[bitstream(compressed(min = -80.0, max = 80.0, bits = 16))]
    position: [f32; 3],
    #[bitstream(compressed(min = 0.0, max = 1.0, bits = 8))]
    charge: f32,
    #[bitstream(data)]
    payload: Vec<u8>,
    label: Option<String>,
}

#[derive(BitStreamCodable, Debug, PartialEq)]
struct Wrapper<T> {
    inner: T,
    tail: bool,
}

#[test]
fn unit_struct_takes_no_bits() {
    let mut writer = WritableBitStream::new();
    writer.write(&Empty).unwrap();
    assert!(writer.is_empty());

    let mut reader = ReadableBitStream::new(writer.pack_data());
    assert_eq!(reader.read::<Empty>().unwrap(), Empty);
}

#[test]
fn tuple_struct_fields_in_order() {
    let mut writer = WritableBitStream::new();
    writer.write(&Pair(513, true)).unwrap();
    assert_eq!(writer.bit_len(), 17);

    let mut reader = ReadableBitStream::new(writer.pack_data());
    assert_eq!(reader.read_u32_bits(16).unwrap(), 513);
    assert!(reader.read_bool().unwrap());
}

#[test]
fn attributes_shape_the_layout() {
    let in_projectile = Projectile {
        catapult_id: 11,
        shape: Shape::Star,
        position: [1.0, -2.5, 70.0],
        charge: 0.5,
        payload: vec![1, 2, 3],
        label: None,
    };

    let mut writer = WritableBitStream::new();
    writer.write(&in_projectile).unwrap();

    let mut reader = ReadableBitStream::new(writer.pack_data());

    assert_eq!(reader.read_u32_bits(4).unwrap(), 11);
    assert_eq!(reader.read_enum::<Shape>().unwrap(), Shape::Star);

    let position = FloatCompressor::new(-80.0, 80.0, 16)
        .read_vec3(&mut reader)
        .unwrap();
    assert!((position[2] - 70.0).abs() < 0.003);
    assert!((FloatCompressor::new(0.0, 1.0, 8).read(&mut reader).unwrap() - 0.5).abs() < 0.002);
    assert_eq!(reader.read_data().unwrap(), vec![1, 2, 3]);
    assert!(!reader.read_bool().unwrap());
    assert!(reader.is_at_end());
}

#[test]
fn derived_struct_round_trip() {
    let in_projectile = Projectile {
        catapult_id: 2,
        shape: Shape::Round,
        position: [0.0, -12.5, 80.0],
        charge: 0.3,
        payload: Vec::new(),
        label: Some("chicken".to_string()),
    };

    let packed = encode_packed(&in_projectile).unwrap();
    let out_projectile: Projectile = decode_packed(packed).unwrap();

    assert_eq!(in_projectile.catapult_id, out_projectile.catapult_id);
    assert_eq!(in_projectile.shape, out_projectile.shape);
    assert_eq!(in_projectile.payload, out_projectile.payload);
    assert_eq!(in_projectile.label, out_projectile.label);

    let position_error = FloatCompressor::new(-80.0, 80.0, 16).max_error();
    for (sent, received) in in_projectile
        .position
        .iter()
        .zip(out_projectile.position.iter())
    {
        assert!((sent - received).abs() <= position_error);
    }
    let charge_error = FloatCompressor::new(0.0, 1.0, 8).max_error();
    assert!((in_projectile.charge - out_projectile.charge).abs() <= charge_error);
}

#[test]
fn generic_struct() {
    let in_wrapper = Wrapper {
        inner: Pair(7, false),
        tail: true,
    };

    let packed = encode_packed(&in_wrapper).unwrap();
    let out_wrapper: Wrapper<Pair> = decode_packed(packed).unwrap();

    assert_eq!(in_wrapper, out_wrapper);
}
