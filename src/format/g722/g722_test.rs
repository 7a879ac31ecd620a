use super::*;

#[test]
fn test_g722_attributes() {
    let format = G722::default();
    assert_eq!(format.to_string(), "G722");
    assert_eq!(format.codec(), "G722");
    assert_eq!(format.clock_rate(), 8000);
    assert_eq!(format.payload_type(), 9);
    assert_eq!(format.rtp_map(), "G722/8000");
    assert!(format.fmtp().is_none());
    assert!(format.pts_equals_dts(&Packet::default()));
}

#[test]
fn test_g722_pts_equals_dts_ignores_content() {
    let format = G722::default();
    let payloads: Vec<&[u8]> = vec![&[], &[0x00], &[0xFF; 160], &[0x01, 0x02, 0x03, 0x04]];
    for payload in payloads {
        let pkt = Packet {
            header: Header {
                version: 2,
                payload_type: 9,
                marker: payload.is_empty(),
                ..Default::default()
            },
            payload: Bytes::copy_from_slice(payload),
        };
        assert!(format.pts_equals_dts(&pkt), "payload {payload:?}");
    }
}

#[test]
fn test_g722_dec_encoder() -> Result<()> {
    let format = G722::default();

    let enc = format.create_encoder()?;
    let pkt = enc.encode(&[0x01, 0x02, 0x03, 0x04], 0)?;
    assert_eq!(pkt.header.payload_type, format.payload_type());
    assert_eq!(pkt.header.version, 2);
    assert!(pkt.header.marker, "single packet frames carry the marker bit");

    let dec = format.create_decoder()?;
    let (frame, timestamp) = dec.decode(&pkt)?;
    assert_eq!(&frame[..], &[0x01, 0x02, 0x03, 0x04]);
    assert_eq!(timestamp, 0);

    Ok(())
}

#[test]
fn test_g722_round_trip() -> Result<()> {
    let enc = G722Encoder::new();
    let dec = G722Decoder;

    let frames: Vec<Vec<u8>> = vec![
        vec![],
        vec![0x90],
        (0..=255).collect(),
        (0..1500).map(|i| (i * 7 % 256) as u8).collect(),
    ];
    let timestamps = [0, 1, 160, 0x7FFF_FFFF, u32::MAX];

    for frame in &frames {
        for timestamp in timestamps {
            let pkt = enc.encode(frame, timestamp)?;
            assert_eq!(pkt.header.payload_type, PAYLOAD_TYPE);
            assert_eq!(pkt.header.timestamp, timestamp);

            let (out, ts) = dec.decode(&pkt)?;
            assert_eq!(&out[..], &frame[..], "frame of {} bytes", frame.len());
            assert_eq!(ts, timestamp);
        }
    }

    Ok(())
}

#[test]
fn test_g722_encoder_copies_input() -> Result<()> {
    let enc = G722Encoder::new().with_ssrc(0x1234_5678);
    let mut buf = vec![0x01, 0x02, 0x03];

    let pkt = enc.encode(&buf, 320)?;
    buf.copy_from_slice(&[0xAA, 0xBB, 0xCC]);

    assert_eq!(&pkt.payload[..], &[0x01, 0x02, 0x03], "payload must not alias input");
    assert_eq!(pkt.header.ssrc, 0x1234_5678);
    assert_eq!(enc.ssrc(), 0x1234_5678);

    Ok(())
}

#[test]
fn test_g722_decoder_rejects_invalid_packets() {
    let dec = G722Decoder;

    let tests: Vec<(&str, Packet, Error)> = vec![
        (
            "DefaultPacket",
            Packet::default(),
            Error::ErrInvalidRtpVersion(0),
        ),
        (
            "WrongPayloadType",
            Packet {
                header: Header {
                    version: 2,
                    payload_type: 0,
                    ..Default::default()
                },
                payload: Bytes::from_static(&[0x01]),
            },
            Error::ErrPayloadTypeMismatch {
                expected: 9,
                actual: 0,
            },
        ),
        (
            "Version1",
            Packet {
                header: Header {
                    version: 1,
                    payload_type: 9,
                    ..Default::default()
                },
                payload: Bytes::from_static(&[0x01]),
            },
            Error::ErrInvalidRtpVersion(1),
        ),
    ];

    for (name, pkt, expected) in tests {
        assert_eq!(dec.decode(&pkt), Err(expected), "{name} failed");
    }
}

#[test]
fn test_g722_unmarshal() -> Result<()> {
    let mut format = G722::default();
    format.unmarshal(&FormatDescription {
        media_type: "audio".to_owned(),
        payload_type: 9,
        encoding_name: "G722".to_owned(),
        rtp_map: "G722/8000".to_owned(),
        ..Default::default()
    })?;

    assert_eq!(format.payload_type(), 9);
    assert_eq!(format.clock_rate(), 8000);
    assert!(format.create_encoder().is_ok());
    assert!(format.create_decoder().is_ok());

    Ok(())
}

#[test]
fn test_g722_rejects_other_payload_types() -> Result<()> {
    let mut format = G722::default();
    format.unmarshal(&FormatDescription {
        payload_type: 96,
        rtp_map: "G722/8000".to_owned(),
        ..Default::default()
    })?;

    let expected = Error::ErrUnsupportedPayloadType {
        expected: 9,
        actual: 96,
    };
    assert_eq!(format.create_encoder().unwrap_err(), expected);
    assert_eq!(format.create_decoder().unwrap_err(), expected);

    Ok(())
}

#[test]
fn test_g722_concurrent_use() -> Result<()> {
    let format = G722::default();
    let enc = format.create_encoder()?;
    let dec = format.create_decoder()?;

    std::thread::scope(|s| {
        for worker in 0..4u8 {
            let (enc, dec) = (&enc, &dec);
            s.spawn(move || {
                for i in 0..100u32 {
                    let frame = [worker, (i % 256) as u8];
                    let pkt = enc.encode(&frame, i * 160).expect("encode");
                    let (out, ts) = dec.decode(&pkt).expect("decode");
                    assert_eq!(&out[..], &frame);
                    assert_eq!(ts, i * 160);
                }
            });
        }
    });

    Ok(())
}
