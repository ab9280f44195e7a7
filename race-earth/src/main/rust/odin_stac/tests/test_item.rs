use std::collections::BTreeMap;
use chrono::{TimeZone, Utc};
use tracing_test::traced_test;
use odin_gdal::srs::epsg_to_wkt2;
use odin_stac::*;
use odin_stac::stac::{Geometry, Item, Sampling, DataType, media_type, RASTER_SCHEMA, PROJECTION_SCHEMA, FILE_SCHEMA};

fn descriptor (year: Option<i32>, file_size: Option<u64>) -> GeospatialDescriptor {
    GeospatialDescriptor {
        bbox: [500000.0, 5499980.0, 500040.0, 5500000.0],
        geometry: Geometry::Polygon { coordinates: vec![ vec![
            [500040.0, 5499980.0], [500040.0, 5500000.0], [500000.0, 5500000.0], [500000.0, 5499980.0], [500040.0, 5499980.0]
        ]]},
        transform: [1.0, 0.0, 500000.0, 0.0, -1.0, 5500000.0],
        shape: [20, 40],
        tags: BTreeMap::new(),
        sampling: Sampling::Point,
        acquisition_year: year,
        epsg: Some(3157),
        wkt2: Some("PROJCRS[\"NAD83(CSRS) / UTM zone 10N\"]".to_string()),
        file_size,
    }
}

fn profile_with_tokens (expected_tokens: usize) -> DatasetProfile {
    let mut profile = DatasetProfile::bc_dem();
    profile.file_naming.expected_tokens = Some(expected_tokens);
    profile
}

#[test]
fn test_bc_dem_item() {
    let href = "https://example.com/dem/bc_092b012_xli1m_utm10_2018.tif";
    let item = create_item( href, &descriptor(Some(2018), Some(4242)), &DatasetProfile::bc_dem()).unwrap();

    assert_eq!( item.id, "bc_092b012_xli1m_utm10_2018");
    assert_eq!( item.bbox, [500000.0, 5499980.0, 500040.0, 5500000.0]);
    assert_eq!( item.properties.datetime, Utc.with_ymd_and_hms(2018,1,1, 0,0,0).unwrap());
    assert_eq!( item.properties.license.as_deref(), Some("proprietary"));
    assert_eq!( item.properties.providers.len(), 1);
    assert_eq!( item.properties.projection.epsg, Some(3157));
    assert_eq!( item.properties.projection.transform, Some([1.0, 0.0, 500000.0, 0.0, -1.0, 5500000.0]));
    assert_eq!( item.properties.projection.shape, Some([20, 40]));
    assert!( item.links.is_empty());

    for schema in [PROJECTION_SCHEMA, RASTER_SCHEMA, FILE_SCHEMA] {
        assert!( item.stac_extensions.iter().any(|s| s == schema));
    }

    let asset = item.assets.get("data").unwrap();
    assert_eq!( asset.href, href);
    assert_eq!( asset.title.as_deref(), Some("BCGS Tile 092b012"));
    assert_eq!( asset.media_type.as_deref(), Some(media_type::COG));
    assert_eq!( asset.roles, vec!["data".to_string()]);
    assert_eq!( asset.file_size, Some(4242));

    let bands = asset.raster_bands.as_ref().unwrap();
    assert_eq!( bands.len(), 1);
    assert_eq!( bands[0].nodata, Some(-9999.0));
    assert_eq!( bands[0].sampling, Some(Sampling::Point));
    assert_eq!( bands[0].data_type, Some(DataType::Float32));
    assert_eq!( bands[0].spatial_resolution, Some(1.0));
    assert_eq!( bands[0].unit.as_deref(), Some("m"));
}

#[test]
fn test_asset_projection_matches_item() {
    let item = create_item( "BC_092B012_2018.tif", &descriptor(Some(2018), None), &DatasetProfile::bc_dem()).unwrap();
    let asset = item.assets.get("data").unwrap();

    assert_eq!( asset.projection, item.properties.projection);
    assert_eq!( asset.projection.bbox, Some(item.bbox));
    assert_eq!( asset.projection.wkt2, Some(epsg_to_wkt2(3157).unwrap()));
}

#[test]
fn test_filename_token_count() {
    let item = create_item( "BC_092B012_2018.tif", &descriptor(Some(2018), None), &profile_with_tokens(3)).unwrap();
    assert_eq!( item.id, "BC_092B012_2018");
    assert_eq!( item.assets["data"].title.as_deref(), Some("BCGS Tile 092B012"));

    match create_item( "BC_092B012.tif", &descriptor(Some(2018), None), &profile_with_tokens(4)) {
        Err(OdinStacError::UnexpectedFileNamingConvention { filename, found, .. }) => {
            assert_eq!( filename, "BC_092B012");
            assert_eq!( found, 2);
        }
        other => panic!("expected UnexpectedFileNamingConvention, got {:?}", other)
    }

    // the title token has to exist even if the count is not fixed
    let result = create_item( "BC.tif", &descriptor(Some(2018), None), &DatasetProfile::bc_dem());
    assert!( matches!( result, Err(OdinStacError::UnexpectedFileNamingConvention{..})));
}

#[test]
fn test_missing_year() {
    let result = create_item( "BC_092B012_2018.tif", &descriptor(None, None), &DatasetProfile::bc_dem());
    assert!( matches!( result, Err(OdinStacError::MissingAcquisitionYear(_))));
}

#[test]
fn test_fixed_date() {
    let date = Utc.with_ymd_and_hms(2020,6,15, 0,0,0).unwrap();
    let mut profile = DatasetProfile::bc_dem();
    profile.date_rule = DateRule::Fixed(date);

    let item = create_item( "BC_092B012_2018.tif", &descriptor(None, None), &profile).unwrap();
    assert_eq!( item.properties.datetime, date);
}

#[test]
fn test_filename_year() {
    let mut profile = DatasetProfile::bc_dem();
    profile.date_rule = DateRule::FilenameToken(2);

    let item = create_item( "BC_092B012_2017.tif", &descriptor(Some(2018), None), &profile).unwrap();
    assert_eq!( item.properties.datetime, Utc.with_ymd_and_hms(2017,1,1, 0,0,0).unwrap());

    let result = create_item( "BC_092B012_xli1m.tif", &descriptor(Some(2018), None), &profile);
    assert!( matches!( result, Err(OdinStacError::UnexpectedFileNamingConvention{..})));

    let result = create_item( "BC_092B012.tif", &descriptor(Some(2018), None), &profile);
    assert!( matches!( result, Err(OdinStacError::UnexpectedFileNamingConvention{..})));
}

#[test]
fn test_json_round_trip() {
    let item = create_item( "BC_092B012_2018.tif", &descriptor(Some(2018), Some(1024)), &DatasetProfile::bc_dem()).unwrap();
    let json = item.to_json_string().unwrap();
    let restored = Item::from_json_str(&json).unwrap();

    assert_eq!( restored.bbox, item.bbox);
    assert_eq!( restored.properties.projection.epsg, Some(3157));
    assert_eq!( restored.assets["data"].raster_bands.as_ref().unwrap()[0].nodata, Some(-9999.0));
    assert_eq!( restored, item);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!( value["type"], "Feature");
    assert_eq!( value["stac_version"], "1.0.0");
    assert_eq!( value["geometry"]["type"], "Polygon");
    assert_eq!( value["properties"]["datetime"], "2018-01-01T00:00:00Z");
    assert_eq!( value["properties"]["proj:epsg"], 3157);
    assert_eq!( value["assets"]["data"]["file:size"], 1024);
    assert_eq!( value["assets"]["data"]["raster:bands"][0]["data_type"], "float32");
    assert_eq!( value["assets"]["data"]["raster:bands"][0]["sampling"], "point");
}

#[test]
fn test_file_size_omitted() {
    let item = create_item( "BC_092B012_2018.tif", &descriptor(Some(2018), None), &DatasetProfile::bc_dem()).unwrap();
    let value: serde_json::Value = serde_json::from_str( &item.to_json_string().unwrap()).unwrap();

    let asset = value["assets"]["data"].as_object().unwrap();
    assert!( !asset.contains_key("file:size"));
}

#[traced_test]
#[test]
fn test_crs_mismatch() {
    let mut desc = descriptor(Some(2018), None);
    desc.epsg = Some(26910);
    desc.wkt2 = Some("PROJCRS[\"NAD83 / UTM zone 10N\"]".to_string());

    let item = create_item( "BC_092B012_2018.tif", &desc, &DatasetProfile::bc_dem()).unwrap();

    // the record always describes the profile CRS
    assert_eq!( item.properties.projection.epsg, Some(3157));
    assert_eq!( item.properties.projection.wkt2, Some(epsg_to_wkt2(3157).unwrap()));
    assert!( logs_contain("EPSG:26910"));
}

#[test]
fn test_wkt2_from_profile() {
    // the raster's own WKT2 export is not used, all items of a profile share the same CRS WKT2
    let profile = DatasetProfile::bc_dem();
    let a = create_item( "BC_092B012_2018.tif", &descriptor(Some(2018), None), &profile).unwrap();

    let mut desc = descriptor(Some(2018), None);
    desc.wkt2 = None;
    let b = create_item( "BC_092B013_2018.tif", &desc, &profile).unwrap();

    assert_eq!( a.properties.projection.wkt2, b.properties.projection.wkt2);
    assert_eq!( a.properties.projection.wkt2, Some(profile.crs_wkt2().unwrap()));
}

#[test]
fn test_unknown_profile_crs() {
    let mut profile = DatasetProfile::bc_dem();
    profile.epsg = 999999;

    let result = create_item( "BC_092B012_2018.tif", &descriptor(Some(2018), None), &profile);
    assert!( matches!( result, Err(OdinStacError::OdinGdalError(_))));
}
