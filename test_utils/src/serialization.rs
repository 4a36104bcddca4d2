/// Checks that an object survives a round trip through arkworks' compressed and uncompressed
/// encodings, JSON and MessagePack. Expects `CanonicalSerialize` and `CanonicalDeserialize` in
/// scope and `serde_json` and `rmp_serde` as dependencies of the calling crate.
#[macro_export]
macro_rules! test_serialization {
    ($obj_type:ty, $obj: expr) => {
        let mut serz = vec![];
        CanonicalSerialize::serialize_compressed(&$obj, &mut serz).unwrap();
        assert_eq!(serz.len(), $obj.compressed_size());
        let deserz: $obj_type = CanonicalDeserialize::deserialize_compressed(&serz[..]).unwrap();
        assert_eq!(deserz, $obj);
        // A truncated encoding is rejected
        assert!(<$obj_type as CanonicalDeserialize>::deserialize_compressed(
            &serz[..serz.len() - 1]
        )
        .is_err());

        let mut serz = vec![];
        $obj.serialize_uncompressed(&mut serz).unwrap();
        let deserz: $obj_type = CanonicalDeserialize::deserialize_uncompressed(&serz[..]).unwrap();
        assert_eq!(deserz, $obj);

        let ser = serde_json::to_string(&$obj).unwrap();
        let deser = serde_json::from_str::<$obj_type>(&ser).unwrap();
        assert_eq!($obj, deser);

        let ser = rmp_serde::to_vec_named(&$obj).unwrap();
        let deser = rmp_serde::from_slice::<$obj_type>(&ser).unwrap();
        assert_eq!($obj, deser);
    };
}
