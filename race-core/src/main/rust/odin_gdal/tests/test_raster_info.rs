use std::path::Path;
use gdal::{DriverManager, Metadata};
use gdal::spatial_ref::SpatialRef;
use odin_gdal::RasterInfo;
use odin_gdal::srs::epsg_to_wkt2;

fn create_raster (path: &Path, tags: &[(&str,&str)]) {
    let driver = DriverManager::get_driver_by_name("GTiff").unwrap();
    let mut ds = driver.create_with_band_type::<f32,_>(path, 40, 20, 1).unwrap();
    ds.set_geo_transform(&[500000.0, 1.0, 0.0, 5500000.0, 0.0, -1.0]).unwrap();
    ds.set_spatial_ref(&SpatialRef::from_epsg(3157).unwrap()).unwrap();
    for (k,v) in tags {
        ds.set_metadata_item(k, v, "").unwrap();
    }
    // dataset is closed (and flushed) when dropped
}

#[test]
fn test_raster_info() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bc_092b012_2018.tif");
    create_raster(&path, &[("YEAR","2018")]);

    let info = RasterInfo::open(&path).unwrap();
    assert_eq!( (info.width, info.height), (40, 20));
    assert_eq!( info.shape(), [20, 40]);
    assert_eq!( info.band_count, 1);
    assert_eq!( info.bounds().to_minmax_array(), [500000.0, 5499980.0, 500040.0, 5500000.0]);
    assert_eq!( info.affine(), [1.0, 0.0, 500000.0, 0.0, -1.0, 5500000.0]);
    assert_eq!( info.metadata_item("YEAR"), Some("2018"));
    assert_eq!( info.metadata_item("AREA_OR_POINT"), Some("Area"));
    assert_eq!( info.epsg, Some(3157));
    assert!( info.wkt2.as_deref().unwrap_or("").contains("NAD83(CSRS)"));
}

#[test]
fn test_point_sampling_tag() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("point.tif");
    create_raster(&path, &[("AREA_OR_POINT","Point")]);

    let info = RasterInfo::open(&path).unwrap();
    assert_eq!( info.metadata_item("AREA_OR_POINT"), Some("Point"));
    assert!( info.metadata_item("YEAR").is_none());
}

#[test]
fn test_open_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("not_a_raster.tif");
    std::fs::write(&path, b"this is not a tiff").unwrap();

    assert!( RasterInfo::open(&path).is_err());
    assert!( RasterInfo::open(dir.path().join("missing.tif")).is_err());
}

#[test]
fn test_wkt2() {
    let wkt = epsg_to_wkt2(3157).unwrap();
    assert!( wkt.starts_with("PROJCRS"));
    assert!( wkt.contains("UTM zone 10N"));
}
