//! Built-in namespace schemas
//!
//! Declarations for the default XMP namespaces. Only scalar properties are
//! declared; arrays, structures and language alternatives are outside what a
//! namespace store can hold.

use crate::core::namespace::Schema;
use crate::types::value::ValueType;

/// Well-known namespace URIs
pub mod ns {
    /// Resource Reference structure namespace
    pub const ST_REF: &str = "http://ns.adobe.com/xap/1.0/sType/ResourceRef#";
    /// Dublin Core namespace
    pub const DC: &str = "http://purl.org/dc/elements/1.1/";
    /// XMP Basic namespace
    pub const XMP: &str = "http://ns.adobe.com/xap/1.0/";
    /// XMP Rights namespace
    pub const XMP_RIGHTS: &str = "http://ns.adobe.com/xap/1.0/rights/";
    /// XMP Media Management namespace
    pub const XMP_MM: &str = "http://ns.adobe.com/xap/1.0/mm/";
    /// XMP Identifier qualifier namespace
    pub const XMP_IDQ: &str = "http://ns.adobe.com/xmp/Identifier/qual/1.0/";
    /// EXIF 2.3 additions namespace
    pub const EXIF_EX: &str = "http://cipa.jp/exif/1.0/";
    /// EXIF namespace
    pub const EXIF: &str = "http://ns.adobe.com/exif/1.0/";
    /// TIFF namespace
    pub const TIFF: &str = "http://ns.adobe.com/tiff/1.0/";
    /// RDF namespace
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// Adobe meta wrapper namespace (`x:xmpmeta`)
    pub const X: &str = "adobe:ns:meta/";
    /// XML namespace (for xml:lang, etc.)
    pub const XML: &str = "http://www.w3.org/XML/1998/namespace";
}

/// `stRef`: references to other resources
#[derive(Debug, Clone, Copy)]
pub struct StRefNamespace;

impl Schema for StRefNamespace {
    const URI: Option<&'static str> = Some(ns::ST_REF);
    const TYPES: &'static [(&'static str, ValueType)] = &[
        ("documentID", ValueType::Uri),
        ("instanceID", ValueType::Uri),
        ("filePath", ValueType::Uri),
        ("renditionClass", ValueType::Text),
        ("renditionParams", ValueType::Text),
        ("versionID", ValueType::Text),
        ("manager", ValueType::Text),
        ("managerVariant", ValueType::Text),
        ("manageTo", ValueType::Uri),
        ("manageUI", ValueType::Uri),
    ];
}

/// `dc`: Dublin Core
#[derive(Debug, Clone, Copy)]
pub struct DcNamespace;

impl Schema for DcNamespace {
    const URI: Option<&'static str> = Some(ns::DC);
    const TYPES: &'static [(&'static str, ValueType)] = &[
        ("format", ValueType::Text),
        ("identifier", ValueType::Text),
        ("source", ValueType::Text),
        ("coverage", ValueType::Text),
    ];
}

/// `xmp`: XMP Basic
#[derive(Debug, Clone, Copy)]
pub struct XmpNamespace;

impl Schema for XmpNamespace {
    const URI: Option<&'static str> = Some(ns::XMP);
    const TYPES: &'static [(&'static str, ValueType)] = &[
        ("BaseURL", ValueType::Uri),
        ("CreatorTool", ValueType::Text),
        ("Label", ValueType::Text),
        ("Nickname", ValueType::Text),
        ("Rating", ValueType::Real),
    ];
}

/// `xmpRights`: XMP Rights Management
#[derive(Debug, Clone, Copy)]
pub struct XmpRightsNamespace;

impl Schema for XmpRightsNamespace {
    const URI: Option<&'static str> = Some(ns::XMP_RIGHTS);
    const TYPES: &'static [(&'static str, ValueType)] = &[
        ("Certificate", ValueType::Text),
        ("Marked", ValueType::Boolean),
        ("WebStatement", ValueType::Uri),
    ];
}

/// `xmpMM`: XMP Media Management
#[derive(Debug, Clone, Copy)]
pub struct XmpMMNamespace;

impl Schema for XmpMMNamespace {
    const URI: Option<&'static str> = Some(ns::XMP_MM);
    const TYPES: &'static [(&'static str, ValueType)] = &[
        ("DocumentID", ValueType::Uri),
        ("InstanceID", ValueType::Uri),
        ("OriginalDocumentID", ValueType::Uri),
        ("RenditionClass", ValueType::Text),
        ("RenditionParams", ValueType::Text),
    ];
}

/// `xmpidq`: qualifier naming the scheme of an `xmp:Identifier`
#[derive(Debug, Clone, Copy)]
pub struct XmpidqNamespace;

impl Schema for XmpidqNamespace {
    const URI: Option<&'static str> = Some(ns::XMP_IDQ);
    const TYPES: &'static [(&'static str, ValueType)] = &[("Scheme", ValueType::Text)];
    const REQUIRED: &'static [&'static str] = &["Scheme"];
}

/// `exifEX`: EXIF 2.3 properties
#[derive(Debug, Clone, Copy)]
pub struct ExifEXNamespace;

impl Schema for ExifEXNamespace {
    const URI: Option<&'static str> = Some(ns::EXIF_EX);
    const TYPES: &'static [(&'static str, ValueType)] = &[
        ("BodySerialNumber", ValueType::Text),
        ("CameraOwnerName", ValueType::Text),
        ("Gamma", ValueType::Real),
        ("LensMake", ValueType::Text),
        ("LensModel", ValueType::Text),
        ("LensSerialNumber", ValueType::Text),
        ("PhotographicSensitivity", ValueType::Integer),
        ("SensitivityType", ValueType::Integer),
    ];
}

/// `exif`: EXIF-specific properties
#[derive(Debug, Clone, Copy)]
pub struct ExifNamespace;

impl Schema for ExifNamespace {
    const URI: Option<&'static str> = Some(ns::EXIF);
    const TYPES: &'static [(&'static str, ValueType)] = &[
        ("ColorSpace", ValueType::Integer),
        ("ExifVersion", ValueType::Text),
        ("FNumber", ValueType::Real),
        ("FocalLength", ValueType::Real),
        ("PixelXDimension", ValueType::Integer),
        ("PixelYDimension", ValueType::Integer),
        ("UserComment", ValueType::Text),
    ];
}

/// `tiff`: TIFF image properties
#[derive(Debug, Clone, Copy)]
pub struct TiffNamespace;

impl Schema for TiffNamespace {
    const URI: Option<&'static str> = Some(ns::TIFF);
    const TYPES: &'static [(&'static str, ValueType)] = &[
        ("ImageWidth", ValueType::Integer),
        ("ImageLength", ValueType::Integer),
        ("BitsPerSample", ValueType::Integer),
        ("SamplesPerPixel", ValueType::Integer),
        ("Compression", ValueType::Integer),
        ("PhotometricInterpretation", ValueType::Integer),
        ("Orientation", ValueType::Integer),
        ("PlanarConfiguration", ValueType::Integer),
        ("XResolution", ValueType::Real),
        ("YResolution", ValueType::Real),
        ("ResolutionUnit", ValueType::Integer),
        ("Make", ValueType::Text),
        ("Model", ValueType::Text),
        ("Software", ValueType::Text),
        ("Artist", ValueType::Text),
    ];
    const REQUIRED: &'static [&'static str] = &["ImageWidth", "ImageLength"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::namespace::Namespace;
    use crate::core::prefix::derive_prefix;

    #[test]
    fn test_builtin_prefixes() {
        assert_eq!(derive_prefix(StRefNamespace::type_name()), "st-ref");
        assert_eq!(derive_prefix(DcNamespace::type_name()), "dc");
        assert_eq!(derive_prefix(XmpNamespace::type_name()), "xmp");
        assert_eq!(derive_prefix(XmpRightsNamespace::type_name()), "xmp-rights");
        assert_eq!(derive_prefix(XmpMMNamespace::type_name()), "xmp-mm");
        assert_eq!(derive_prefix(XmpidqNamespace::type_name()), "xmpidq");
        assert_eq!(derive_prefix(ExifEXNamespace::type_name()), "exif-ex");
        assert_eq!(derive_prefix(ExifNamespace::type_name()), "exif");
        assert_eq!(derive_prefix(TiffNamespace::type_name()), "tiff");
    }

    #[test]
    fn test_xmpidq_requires_scheme() {
        let mut ns = Namespace::<XmpidqNamespace>::new().unwrap();
        assert!(!ns.is_valid());
        ns.set("Scheme", "ISBN");
        assert!(ns.is_valid());
    }

    #[test]
    fn test_rights_marked_coerces_from_text() {
        let mut ns = Namespace::<XmpRightsNamespace>::new().unwrap();
        ns.set("Marked", "True");
        ns.set("WebStatement", "http://example.com/license");
        assert!(ns.is_valid());

        // Boolean and URI kinds accept any scalar
        ns.set("Marked", "maybe");
        ns.set("WebStatement", 42);
        assert!(ns.is_valid());
    }

    #[test]
    fn test_every_builtin_declares_a_uri() {
        assert_eq!(Namespace::<StRefNamespace>::new().unwrap().uri(), ns::ST_REF);
        assert_eq!(Namespace::<DcNamespace>::new().unwrap().uri(), ns::DC);
        assert_eq!(Namespace::<XmpNamespace>::new().unwrap().uri(), ns::XMP);
        assert_eq!(Namespace::<XmpMMNamespace>::new().unwrap().uri(), ns::XMP_MM);
        assert_eq!(Namespace::<ExifEXNamespace>::new().unwrap().uri(), ns::EXIF_EX);
        assert_eq!(Namespace::<ExifNamespace>::new().unwrap().uri(), ns::EXIF);
        assert_eq!(Namespace::<TiffNamespace>::new().unwrap().uri(), ns::TIFF);
    }
}
