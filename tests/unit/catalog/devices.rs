use super::*;

#[test]
fn builtin_has_five_profiles() {
    let catalog = DeviceCatalog::builtin();
    assert_eq!(catalog.profiles().len(), 5);
}

#[test]
fn identify_matches_either_orientation() {
    let catalog = DeviceCatalog::builtin();
    let portrait = ScreenSize {
        width: 1125,
        height: 2436,
    };
    assert_eq!(catalog.identify(portrait), Some(DeviceModel::IphoneXAndXs));
    assert_eq!(
        catalog.identify(portrait.swapped()),
        Some(DeviceModel::IphoneXAndXs)
    );
}

#[test]
fn identify_unmatched_resolution_is_none() {
    let catalog = DeviceCatalog::builtin();
    let screen = ScreenSize {
        width: 999,
        height: 999,
    };
    assert_eq!(catalog.identify(screen), None);
}

#[test]
fn orientation_inferred_from_swapped_resolution() {
    let catalog = DeviceCatalog::builtin();
    let profile = catalog.profile(DeviceModel::IphoneXr).unwrap();

    let portrait = ScreenSize {
        width: 828,
        height: 1792,
    };
    assert_eq!(profile.orientation_of(portrait), Orientation::Portrait);
    assert_eq!(
        profile.orientation_of(portrait.swapped()),
        Orientation::Landscape
    );
    // Anything that is not the exact swapped resolution reads as portrait.
    assert_eq!(
        profile.orientation_of(ScreenSize {
            width: 999,
            height: 999,
        }),
        Orientation::Portrait
    );
}

#[test]
fn landscape_synthesis_swaps_resolution_and_picks_landscape_rect() {
    let catalog = DeviceCatalog::builtin();
    let profile = catalog.profile(DeviceModel::IphoneXAndXs).unwrap();

    let res = profile.resolution_for(Orientation::Landscape);
    assert_eq!(
        res,
        ScreenSize {
            width: 2436,
            height: 1125,
        }
    );

    let safe = profile.safe_area_for(Orientation::Landscape);
    assert_eq!(safe, Rect::from_origin_size((132.0, 63.0), (2172.0, 1062.0)));

    // Landscape safe areas stay inside the swapped resolution.
    for p in catalog.profiles() {
        let r = p.resolution_for(Orientation::Landscape);
        let s = p.safe_area_for(Orientation::Landscape);
        assert!(s.x0 >= 0.0 && s.y0 >= 0.0);
        assert!(s.x1 <= r.width_f64() && s.y1 <= r.height_f64());
    }
}

#[test]
fn device_keys_round_trip() {
    let catalog = DeviceCatalog::builtin();
    for p in catalog.profiles() {
        let parsed: DeviceModel = p.model.key().parse().unwrap();
        assert_eq!(parsed, p.model);
    }
    assert!("pixel-9".parse::<DeviceModel>().is_err());
}

#[test]
fn missing_model_in_custom_catalog_is_catalog_error() {
    let catalog = DeviceCatalog::new(vec![]);
    let err = catalog.profile(DeviceModel::IpadPro11).unwrap_err();
    assert!(matches!(err, SafeframeError::Catalog(_)));
}
