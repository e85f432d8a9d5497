use super::{hash_combine, HashCode, ModelFormatter};
use crate::error::Result;
use crate::query::{QueryWriter, ToQuery};
use crate::xml::{self, FromXml};
use chrono::{DateTime, Utc};
use roxmltree::Node;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfiguration {
    #[serde(rename = "LaunchConfigurationName", skip_serializing_if = "Option::is_none")]
    launch_configuration_name: Option<String>,
    #[serde(rename = "LaunchConfigurationARN", skip_serializing_if = "Option::is_none")]
    launch_configuration_arn: Option<String>,
    #[serde(rename = "ImageId", skip_serializing_if = "Option::is_none")]
    image_id: Option<String>,
    #[serde(rename = "KeyName", skip_serializing_if = "Option::is_none")]
    key_name: Option<String>,
    #[serde(rename = "SecurityGroups", skip_serializing_if = "Option::is_none")]
    security_groups: Option<Vec<String>>,
    #[serde(rename = "ClassicLinkVPCId", skip_serializing_if = "Option::is_none")]
    classic_link_vpc_id: Option<String>,
    #[serde(rename = "ClassicLinkVPCSecurityGroups", skip_serializing_if = "Option::is_none")]
    classic_link_vpc_security_groups: Option<Vec<String>>,
    #[serde(rename = "UserData", skip_serializing_if = "Option::is_none")]
    user_data: Option<String>,
    #[serde(rename = "InstanceType", skip_serializing_if = "Option::is_none")]
    instance_type: Option<String>,
    #[serde(rename = "KernelId", skip_serializing_if = "Option::is_none")]
    kernel_id: Option<String>,
    #[serde(rename = "RamdiskId", skip_serializing_if = "Option::is_none")]
    ramdisk_id: Option<String>,
    #[serde(rename = "BlockDeviceMappings", skip_serializing_if = "Option::is_none")]
    block_device_mappings: Option<Vec<BlockDeviceMapping>>,
    #[serde(rename = "InstanceMonitoring", skip_serializing_if = "Option::is_none")]
    instance_monitoring: Option<InstanceMonitoring>,
    #[serde(rename = "SpotPrice", skip_serializing_if = "Option::is_none")]
    spot_price: Option<String>,
    #[serde(rename = "IamInstanceProfile", skip_serializing_if = "Option::is_none")]
    iam_instance_profile: Option<String>,
    #[serde(rename = "CreatedTime", skip_serializing_if = "Option::is_none")]
    created_time: Option<DateTime<Utc>>,
    #[serde(rename = "EbsOptimized", skip_serializing_if = "Option::is_none")]
    ebs_optimized: Option<bool>,
    #[serde(rename = "AssociatePublicIpAddress", skip_serializing_if = "Option::is_none")]
    associate_public_ip_address: Option<bool>,
    #[serde(rename = "PlacementTenancy", skip_serializing_if = "Option::is_none")]
    placement_tenancy: Option<String>,
}

impl Default for LaunchConfiguration {
    fn default() -> Self {
        LaunchConfiguration {
            launch_configuration_name: None,
            launch_configuration_arn: None,
            image_id: None,
            key_name: None,
            security_groups: Some(Vec::new()),
            classic_link_vpc_id: None,
            classic_link_vpc_security_groups: Some(Vec::new()),
            user_data: None,
            instance_type: None,
            kernel_id: None,
            ramdisk_id: None,
            block_device_mappings: Some(Vec::new()),
            instance_monitoring: None,
            spot_price: None,
            iam_instance_profile: None,
            created_time: None,
            ebs_optimized: None,
            associate_public_ip_address: None,
            placement_tenancy: None,
        }
    }
}

impl LaunchConfiguration {
    pub fn launch_configuration_name(&self) -> Option<&str> {
        self.launch_configuration_name.as_deref()
    }

    pub fn set_launch_configuration_name(&mut self, launch_configuration_name: Option<String>) {
        self.launch_configuration_name = launch_configuration_name;
    }

    pub fn with_launch_configuration_name(
        mut self,
        launch_configuration_name: impl Into<String>,
    ) -> Self {
        self.launch_configuration_name = Some(launch_configuration_name.into());
        self
    }

    pub fn launch_configuration_arn(&self) -> Option<&str> {
        self.launch_configuration_arn.as_deref()
    }

    pub fn set_launch_configuration_arn(&mut self, launch_configuration_arn: Option<String>) {
        self.launch_configuration_arn = launch_configuration_arn;
    }

    pub fn with_launch_configuration_arn(
        mut self,
        launch_configuration_arn: impl Into<String>,
    ) -> Self {
        self.launch_configuration_arn = Some(launch_configuration_arn.into());
        self
    }

    pub fn image_id(&self) -> Option<&str> {
        self.image_id.as_deref()
    }

    pub fn set_image_id(&mut self, image_id: Option<String>) {
        self.image_id = image_id;
    }

    pub fn with_image_id(mut self, image_id: impl Into<String>) -> Self {
        self.image_id = Some(image_id.into());
        self
    }

    pub fn key_name(&self) -> Option<&str> {
        self.key_name.as_deref()
    }

    pub fn set_key_name(&mut self, key_name: Option<String>) {
        self.key_name = key_name;
    }

    pub fn with_key_name(mut self, key_name: impl Into<String>) -> Self {
        self.key_name = Some(key_name.into());
        self
    }

    pub fn security_groups(&self) -> Option<&[String]> {
        self.security_groups.as_deref()
    }

    pub fn set_security_groups(&mut self, security_groups: Option<Vec<String>>) {
        self.security_groups = security_groups;
    }

    pub fn with_security_groups<I>(mut self, security_groups: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.security_groups
            .get_or_insert_with(Vec::new)
            .extend(security_groups.into_iter().map(Into::into));
        self
    }

    pub fn classic_link_vpc_id(&self) -> Option<&str> {
        self.classic_link_vpc_id.as_deref()
    }

    pub fn set_classic_link_vpc_id(&mut self, classic_link_vpc_id: Option<String>) {
        self.classic_link_vpc_id = classic_link_vpc_id;
    }

    pub fn with_classic_link_vpc_id(mut self, classic_link_vpc_id: impl Into<String>) -> Self {
        self.classic_link_vpc_id = Some(classic_link_vpc_id.into());
        self
    }

    pub fn classic_link_vpc_security_groups(&self) -> Option<&[String]> {
        self.classic_link_vpc_security_groups.as_deref()
    }

    pub fn set_classic_link_vpc_security_groups(
        &mut self,
        classic_link_vpc_security_groups: Option<Vec<String>>,
    ) {
        self.classic_link_vpc_security_groups = classic_link_vpc_security_groups;
    }

    pub fn with_classic_link_vpc_security_groups<I>(mut self, classic_link_vpc_security_groups: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.classic_link_vpc_security_groups
            .get_or_insert_with(Vec::new)
            .extend(classic_link_vpc_security_groups.into_iter().map(Into::into));
        self
    }

    /// Base64-encoded.
    pub fn user_data(&self) -> Option<&str> {
        self.user_data.as_deref()
    }

    pub fn set_user_data(&mut self, user_data: Option<String>) {
        self.user_data = user_data;
    }

    pub fn with_user_data(mut self, user_data: impl Into<String>) -> Self {
        self.user_data = Some(user_data.into());
        self
    }

    pub fn instance_type(&self) -> Option<&str> {
        self.instance_type.as_deref()
    }

    pub fn set_instance_type(&mut self, instance_type: Option<String>) {
        self.instance_type = instance_type;
    }

    pub fn with_instance_type(mut self, instance_type: impl Into<String>) -> Self {
        self.instance_type = Some(instance_type.into());
        self
    }

    pub fn kernel_id(&self) -> Option<&str> {
        self.kernel_id.as_deref()
    }

    pub fn set_kernel_id(&mut self, kernel_id: Option<String>) {
        self.kernel_id = kernel_id;
    }

    pub fn with_kernel_id(mut self, kernel_id: impl Into<String>) -> Self {
        self.kernel_id = Some(kernel_id.into());
        self
    }

    pub fn ramdisk_id(&self) -> Option<&str> {
        self.ramdisk_id.as_deref()
    }

    pub fn set_ramdisk_id(&mut self, ramdisk_id: Option<String>) {
        self.ramdisk_id = ramdisk_id;
    }

    pub fn with_ramdisk_id(mut self, ramdisk_id: impl Into<String>) -> Self {
        self.ramdisk_id = Some(ramdisk_id.into());
        self
    }

    pub fn block_device_mappings(&self) -> Option<&[BlockDeviceMapping]> {
        self.block_device_mappings.as_deref()
    }

    pub fn set_block_device_mappings(
        &mut self,
        block_device_mappings: Option<Vec<BlockDeviceMapping>>,
    ) {
        self.block_device_mappings = block_device_mappings;
    }

    pub fn with_block_device_mappings<I>(mut self, block_device_mappings: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<BlockDeviceMapping>,
    {
        self.block_device_mappings
            .get_or_insert_with(Vec::new)
            .extend(block_device_mappings.into_iter().map(Into::into));
        self
    }

    pub fn instance_monitoring(&self) -> Option<&InstanceMonitoring> {
        self.instance_monitoring.as_ref()
    }

    pub fn set_instance_monitoring(&mut self, instance_monitoring: Option<InstanceMonitoring>) {
        self.instance_monitoring = instance_monitoring;
    }

    pub fn with_instance_monitoring(mut self, instance_monitoring: InstanceMonitoring) -> Self {
        self.instance_monitoring = Some(instance_monitoring);
        self
    }

    pub fn spot_price(&self) -> Option<&str> {
        self.spot_price.as_deref()
    }

    pub fn set_spot_price(&mut self, spot_price: Option<String>) {
        self.spot_price = spot_price;
    }

    pub fn with_spot_price(mut self, spot_price: impl Into<String>) -> Self {
        self.spot_price = Some(spot_price.into());
        self
    }

    pub fn iam_instance_profile(&self) -> Option<&str> {
        self.iam_instance_profile.as_deref()
    }

    pub fn set_iam_instance_profile(&mut self, iam_instance_profile: Option<String>) {
        self.iam_instance_profile = iam_instance_profile;
    }

    pub fn with_iam_instance_profile(mut self, iam_instance_profile: impl Into<String>) -> Self {
        self.iam_instance_profile = Some(iam_instance_profile.into());
        self
    }

    pub fn created_time(&self) -> Option<DateTime<Utc>> {
        self.created_time
    }

    pub fn set_created_time(&mut self, created_time: Option<DateTime<Utc>>) {
        self.created_time = created_time;
    }

    pub fn with_created_time(mut self, created_time: DateTime<Utc>) -> Self {
        self.created_time = Some(created_time);
        self
    }

    pub fn ebs_optimized(&self) -> Option<bool> {
        self.ebs_optimized
    }

    pub fn set_ebs_optimized(&mut self, ebs_optimized: Option<bool>) {
        self.ebs_optimized = ebs_optimized;
    }

    pub fn with_ebs_optimized(mut self, ebs_optimized: bool) -> Self {
        self.ebs_optimized = Some(ebs_optimized);
        self
    }

    pub fn associate_public_ip_address(&self) -> Option<bool> {
        self.associate_public_ip_address
    }

    pub fn set_associate_public_ip_address(&mut self, associate_public_ip_address: Option<bool>) {
        self.associate_public_ip_address = associate_public_ip_address;
    }

    pub fn with_associate_public_ip_address(mut self, associate_public_ip_address: bool) -> Self {
        self.associate_public_ip_address = Some(associate_public_ip_address);
        self
    }

    /// `default` or `dedicated`.
    pub fn placement_tenancy(&self) -> Option<&str> {
        self.placement_tenancy.as_deref()
    }

    pub fn set_placement_tenancy(&mut self, placement_tenancy: Option<String>) {
        self.placement_tenancy = placement_tenancy;
    }

    pub fn with_placement_tenancy(mut self, placement_tenancy: impl Into<String>) -> Self {
        self.placement_tenancy = Some(placement_tenancy.into());
        self
    }
}

impl fmt::Display for LaunchConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("LaunchConfigurationName", &self.launch_configuration_name)
            .field("LaunchConfigurationARN", &self.launch_configuration_arn)
            .field("ImageId", &self.image_id)
            .field("KeyName", &self.key_name)
            .list("SecurityGroups", &self.security_groups)
            .field("ClassicLinkVPCId", &self.classic_link_vpc_id)
            .list("ClassicLinkVPCSecurityGroups", &self.classic_link_vpc_security_groups)
            .field("UserData", &self.user_data)
            .field("InstanceType", &self.instance_type)
            .field("KernelId", &self.kernel_id)
            .field("RamdiskId", &self.ramdisk_id)
            .list("BlockDeviceMappings", &self.block_device_mappings)
            .field("InstanceMonitoring", &self.instance_monitoring)
            .field("SpotPrice", &self.spot_price)
            .field("IamInstanceProfile", &self.iam_instance_profile)
            .time("CreatedTime", &self.created_time)
            .field("EbsOptimized", &self.ebs_optimized)
            .field("AssociatePublicIpAddress", &self.associate_public_ip_address)
            .field("PlacementTenancy", &self.placement_tenancy)
            .finish()
    }
}

impl HashCode for LaunchConfiguration {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.launch_configuration_name.hash_code(),
            self.launch_configuration_arn.hash_code(),
            self.image_id.hash_code(),
            self.key_name.hash_code(),
            self.security_groups.hash_code(),
            self.classic_link_vpc_id.hash_code(),
            self.classic_link_vpc_security_groups.hash_code(),
            self.user_data.hash_code(),
            self.instance_type.hash_code(),
            self.kernel_id.hash_code(),
            self.ramdisk_id.hash_code(),
            self.block_device_mappings.hash_code(),
            self.instance_monitoring.hash_code(),
            self.spot_price.hash_code(),
            self.iam_instance_profile.hash_code(),
            self.created_time.hash_code(),
            self.ebs_optimized.hash_code(),
            self.associate_public_ip_address.hash_code(),
            self.placement_tenancy.hash_code(),
        ])
    }
}

impl ToQuery for LaunchConfiguration {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "LaunchConfigurationName", &self.launch_configuration_name);
        writer.field(key, "LaunchConfigurationARN", &self.launch_configuration_arn);
        writer.field(key, "ImageId", &self.image_id);
        writer.field(key, "KeyName", &self.key_name);
        writer.list(key, "SecurityGroups", &self.security_groups);
        writer.field(key, "ClassicLinkVPCId", &self.classic_link_vpc_id);
        writer.list(key, "ClassicLinkVPCSecurityGroups", &self.classic_link_vpc_security_groups);
        writer.field(key, "UserData", &self.user_data);
        writer.field(key, "InstanceType", &self.instance_type);
        writer.field(key, "KernelId", &self.kernel_id);
        writer.field(key, "RamdiskId", &self.ramdisk_id);
        writer.list(key, "BlockDeviceMappings", &self.block_device_mappings);
        writer.field(key, "InstanceMonitoring", &self.instance_monitoring);
        writer.field(key, "SpotPrice", &self.spot_price);
        writer.field(key, "IamInstanceProfile", &self.iam_instance_profile);
        writer.field(key, "CreatedTime", &self.created_time);
        writer.field(key, "EbsOptimized", &self.ebs_optimized);
        writer.field(key, "AssociatePublicIpAddress", &self.associate_public_ip_address);
        writer.field(key, "PlacementTenancy", &self.placement_tenancy);
    }
}

impl FromXml for LaunchConfiguration {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = LaunchConfiguration::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "LaunchConfigurationName" => {
                    out.launch_configuration_name = Some(FromXml::from_xml(child)?);
                }
                "LaunchConfigurationARN" => {
                    out.launch_configuration_arn = Some(FromXml::from_xml(child)?);
                }
                "ImageId" => out.image_id = Some(FromXml::from_xml(child)?),
                "KeyName" => out.key_name = Some(FromXml::from_xml(child)?),
                "SecurityGroups" => out.security_groups = Some(xml::list(child)?),
                "ClassicLinkVPCId" => out.classic_link_vpc_id = Some(FromXml::from_xml(child)?),
                "ClassicLinkVPCSecurityGroups" => {
                    out.classic_link_vpc_security_groups = Some(xml::list(child)?);
                }
                "UserData" => out.user_data = Some(FromXml::from_xml(child)?),
                "InstanceType" => out.instance_type = Some(FromXml::from_xml(child)?),
                "KernelId" => out.kernel_id = Some(FromXml::from_xml(child)?),
                "RamdiskId" => out.ramdisk_id = Some(FromXml::from_xml(child)?),
                "BlockDeviceMappings" => out.block_device_mappings = Some(xml::list(child)?),
                "InstanceMonitoring" => out.instance_monitoring = Some(FromXml::from_xml(child)?),
                "SpotPrice" => out.spot_price = Some(FromXml::from_xml(child)?),
                "IamInstanceProfile" => out.iam_instance_profile = Some(FromXml::from_xml(child)?),
                "CreatedTime" => out.created_time = Some(FromXml::from_xml(child)?),
                "EbsOptimized" => out.ebs_optimized = Some(FromXml::from_xml(child)?),
                "AssociatePublicIpAddress" => {
                    out.associate_public_ip_address = Some(FromXml::from_xml(child)?);
                }
                "PlacementTenancy" => out.placement_tenancy = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockDeviceMapping {
    #[serde(rename = "VirtualName", skip_serializing_if = "Option::is_none")]
    virtual_name: Option<String>,
    #[serde(rename = "DeviceName", skip_serializing_if = "Option::is_none")]
    device_name: Option<String>,
    #[serde(rename = "Ebs", skip_serializing_if = "Option::is_none")]
    ebs: Option<Ebs>,
    #[serde(rename = "NoDevice", skip_serializing_if = "Option::is_none")]
    no_device: Option<bool>,
}

impl BlockDeviceMapping {
    pub fn virtual_name(&self) -> Option<&str> {
        self.virtual_name.as_deref()
    }

    pub fn set_virtual_name(&mut self, virtual_name: Option<String>) {
        self.virtual_name = virtual_name;
    }

    pub fn with_virtual_name(mut self, virtual_name: impl Into<String>) -> Self {
        self.virtual_name = Some(virtual_name.into());
        self
    }

    pub fn device_name(&self) -> Option<&str> {
        self.device_name.as_deref()
    }

    pub fn set_device_name(&mut self, device_name: Option<String>) {
        self.device_name = device_name;
    }

    pub fn with_device_name(mut self, device_name: impl Into<String>) -> Self {
        self.device_name = Some(device_name.into());
        self
    }

    pub fn ebs(&self) -> Option<&Ebs> {
        self.ebs.as_ref()
    }

    pub fn set_ebs(&mut self, ebs: Option<Ebs>) {
        self.ebs = ebs;
    }

    pub fn with_ebs(mut self, ebs: Ebs) -> Self {
        self.ebs = Some(ebs);
        self
    }

    pub fn no_device(&self) -> Option<bool> {
        self.no_device
    }

    pub fn set_no_device(&mut self, no_device: Option<bool>) {
        self.no_device = no_device;
    }

    pub fn with_no_device(mut self, no_device: bool) -> Self {
        self.no_device = Some(no_device);
        self
    }
}

impl fmt::Display for BlockDeviceMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("VirtualName", &self.virtual_name)
            .field("DeviceName", &self.device_name)
            .field("Ebs", &self.ebs)
            .field("NoDevice", &self.no_device)
            .finish()
    }
}

impl HashCode for BlockDeviceMapping {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.virtual_name.hash_code(),
            self.device_name.hash_code(),
            self.ebs.hash_code(),
            self.no_device.hash_code(),
        ])
    }
}

impl ToQuery for BlockDeviceMapping {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "VirtualName", &self.virtual_name);
        writer.field(key, "DeviceName", &self.device_name);
        writer.field(key, "Ebs", &self.ebs);
        writer.field(key, "NoDevice", &self.no_device);
    }
}

impl FromXml for BlockDeviceMapping {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = BlockDeviceMapping::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "VirtualName" => out.virtual_name = Some(FromXml::from_xml(child)?),
                "DeviceName" => out.device_name = Some(FromXml::from_xml(child)?),
                "Ebs" => out.ebs = Some(FromXml::from_xml(child)?),
                "NoDevice" => out.no_device = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// EBS volume settings of a block device mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Ebs {
    #[serde(rename = "SnapshotId", skip_serializing_if = "Option::is_none")]
    snapshot_id: Option<String>,
    #[serde(rename = "VolumeSize", skip_serializing_if = "Option::is_none")]
    volume_size: Option<i32>,
    #[serde(rename = "VolumeType", skip_serializing_if = "Option::is_none")]
    volume_type: Option<String>,
    #[serde(rename = "DeleteOnTermination", skip_serializing_if = "Option::is_none")]
    delete_on_termination: Option<bool>,
    #[serde(rename = "Iops", skip_serializing_if = "Option::is_none")]
    iops: Option<i32>,
    #[serde(rename = "Encrypted", skip_serializing_if = "Option::is_none")]
    encrypted: Option<bool>,
}

impl Ebs {
    pub fn snapshot_id(&self) -> Option<&str> {
        self.snapshot_id.as_deref()
    }

    pub fn set_snapshot_id(&mut self, snapshot_id: Option<String>) {
        self.snapshot_id = snapshot_id;
    }

    pub fn with_snapshot_id(mut self, snapshot_id: impl Into<String>) -> Self {
        self.snapshot_id = Some(snapshot_id.into());
        self
    }

    /// GiB, 1-16384.
    pub fn volume_size(&self) -> Option<i32> {
        self.volume_size
    }

    pub fn set_volume_size(&mut self, volume_size: Option<i32>) {
        self.volume_size = volume_size;
    }

    pub fn with_volume_size(mut self, volume_size: i32) -> Self {
        self.volume_size = Some(volume_size);
        self
    }

    /// `standard`, `io1`, `gp2`, `st1` or `sc1`.
    pub fn volume_type(&self) -> Option<&str> {
        self.volume_type.as_deref()
    }

    pub fn set_volume_type(&mut self, volume_type: Option<String>) {
        self.volume_type = volume_type;
    }

    pub fn with_volume_type(mut self, volume_type: impl Into<String>) -> Self {
        self.volume_type = Some(volume_type.into());
        self
    }

    pub fn delete_on_termination(&self) -> Option<bool> {
        self.delete_on_termination
    }

    pub fn set_delete_on_termination(&mut self, delete_on_termination: Option<bool>) {
        self.delete_on_termination = delete_on_termination;
    }

    pub fn with_delete_on_termination(mut self, delete_on_termination: bool) -> Self {
        self.delete_on_termination = Some(delete_on_termination);
        self
    }

    /// Only for `io1`, 100-20000.
    pub fn iops(&self) -> Option<i32> {
        self.iops
    }

    pub fn set_iops(&mut self, iops: Option<i32>) {
        self.iops = iops;
    }

    pub fn with_iops(mut self, iops: i32) -> Self {
        self.iops = Some(iops);
        self
    }

    pub fn encrypted(&self) -> Option<bool> {
        self.encrypted
    }

    pub fn set_encrypted(&mut self, encrypted: Option<bool>) {
        self.encrypted = encrypted;
    }

    pub fn with_encrypted(mut self, encrypted: bool) -> Self {
        self.encrypted = Some(encrypted);
        self
    }
}

impl fmt::Display for Ebs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("SnapshotId", &self.snapshot_id)
            .field("VolumeSize", &self.volume_size)
            .field("VolumeType", &self.volume_type)
            .field("DeleteOnTermination", &self.delete_on_termination)
            .field("Iops", &self.iops)
            .field("Encrypted", &self.encrypted)
            .finish()
    }
}

impl HashCode for Ebs {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.snapshot_id.hash_code(),
            self.volume_size.hash_code(),
            self.volume_type.hash_code(),
            self.delete_on_termination.hash_code(),
            self.iops.hash_code(),
            self.encrypted.hash_code(),
        ])
    }
}

impl ToQuery for Ebs {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "SnapshotId", &self.snapshot_id);
        writer.field(key, "VolumeSize", &self.volume_size);
        writer.field(key, "VolumeType", &self.volume_type);
        writer.field(key, "DeleteOnTermination", &self.delete_on_termination);
        writer.field(key, "Iops", &self.iops);
        writer.field(key, "Encrypted", &self.encrypted);
    }
}

impl FromXml for Ebs {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = Ebs::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "SnapshotId" => out.snapshot_id = Some(FromXml::from_xml(child)?),
                "VolumeSize" => out.volume_size = Some(FromXml::from_xml(child)?),
                "VolumeType" => out.volume_type = Some(FromXml::from_xml(child)?),
                "DeleteOnTermination" => {
                    out.delete_on_termination = Some(FromXml::from_xml(child)?);
                }
                "Iops" => out.iops = Some(FromXml::from_xml(child)?),
                "Encrypted" => out.encrypted = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceMonitoring {
    #[serde(rename = "Enabled", skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
}

impl InstanceMonitoring {
    /// Detailed (one minute) monitoring when true.
    pub fn enabled(&self) -> Option<bool> {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: Option<bool>) {
        self.enabled = enabled;
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }
}

impl fmt::Display for InstanceMonitoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("Enabled", &self.enabled)
            .finish()
    }
}

impl HashCode for InstanceMonitoring {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.enabled.hash_code(),
        ])
    }
}

impl ToQuery for InstanceMonitoring {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "Enabled", &self.enabled);
    }
}

impl FromXml for InstanceMonitoring {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = InstanceMonitoring::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "Enabled" => out.enabled = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `CreateLaunchConfiguration`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateLaunchConfigurationRequest {
    #[serde(rename = "LaunchConfigurationName", skip_serializing_if = "Option::is_none")]
    launch_configuration_name: Option<String>,
    #[serde(rename = "ImageId", skip_serializing_if = "Option::is_none")]
    image_id: Option<String>,
    #[serde(rename = "KeyName", skip_serializing_if = "Option::is_none")]
    key_name: Option<String>,
    #[serde(rename = "SecurityGroups", skip_serializing_if = "Option::is_none")]
    security_groups: Option<Vec<String>>,
    #[serde(rename = "ClassicLinkVPCId", skip_serializing_if = "Option::is_none")]
    classic_link_vpc_id: Option<String>,
    #[serde(rename = "ClassicLinkVPCSecurityGroups", skip_serializing_if = "Option::is_none")]
    classic_link_vpc_security_groups: Option<Vec<String>>,
    #[serde(rename = "UserData", skip_serializing_if = "Option::is_none")]
    user_data: Option<String>,
    #[serde(rename = "InstanceId", skip_serializing_if = "Option::is_none")]
    instance_id: Option<String>,
    #[serde(rename = "InstanceType", skip_serializing_if = "Option::is_none")]
    instance_type: Option<String>,
    #[serde(rename = "KernelId", skip_serializing_if = "Option::is_none")]
    kernel_id: Option<String>,
    #[serde(rename = "RamdiskId", skip_serializing_if = "Option::is_none")]
    ramdisk_id: Option<String>,
    #[serde(rename = "BlockDeviceMappings", skip_serializing_if = "Option::is_none")]
    block_device_mappings: Option<Vec<BlockDeviceMapping>>,
    #[serde(rename = "InstanceMonitoring", skip_serializing_if = "Option::is_none")]
    instance_monitoring: Option<InstanceMonitoring>,
    #[serde(rename = "SpotPrice", skip_serializing_if = "Option::is_none")]
    spot_price: Option<String>,
    #[serde(rename = "IamInstanceProfile", skip_serializing_if = "Option::is_none")]
    iam_instance_profile: Option<String>,
    #[serde(rename = "EbsOptimized", skip_serializing_if = "Option::is_none")]
    ebs_optimized: Option<bool>,
    #[serde(rename = "AssociatePublicIpAddress", skip_serializing_if = "Option::is_none")]
    associate_public_ip_address: Option<bool>,
    #[serde(rename = "PlacementTenancy", skip_serializing_if = "Option::is_none")]
    placement_tenancy: Option<String>,
}

impl Default for CreateLaunchConfigurationRequest {
    fn default() -> Self {
        CreateLaunchConfigurationRequest {
            launch_configuration_name: None,
            image_id: None,
            key_name: None,
            security_groups: Some(Vec::new()),
            classic_link_vpc_id: None,
            classic_link_vpc_security_groups: Some(Vec::new()),
            user_data: None,
            instance_id: None,
            instance_type: None,
            kernel_id: None,
            ramdisk_id: None,
            block_device_mappings: Some(Vec::new()),
            instance_monitoring: None,
            spot_price: None,
            iam_instance_profile: None,
            ebs_optimized: None,
            associate_public_ip_address: None,
            placement_tenancy: None,
        }
    }
}

impl CreateLaunchConfigurationRequest {
    /// Length 1-255.
    pub fn launch_configuration_name(&self) -> Option<&str> {
        self.launch_configuration_name.as_deref()
    }

    pub fn set_launch_configuration_name(&mut self, launch_configuration_name: Option<String>) {
        self.launch_configuration_name = launch_configuration_name;
    }

    pub fn with_launch_configuration_name(
        mut self,
        launch_configuration_name: impl Into<String>,
    ) -> Self {
        self.launch_configuration_name = Some(launch_configuration_name.into());
        self
    }

    pub fn image_id(&self) -> Option<&str> {
        self.image_id.as_deref()
    }

    pub fn set_image_id(&mut self, image_id: Option<String>) {
        self.image_id = image_id;
    }

    pub fn with_image_id(mut self, image_id: impl Into<String>) -> Self {
        self.image_id = Some(image_id.into());
        self
    }

    pub fn key_name(&self) -> Option<&str> {
        self.key_name.as_deref()
    }

    pub fn set_key_name(&mut self, key_name: Option<String>) {
        self.key_name = key_name;
    }

    pub fn with_key_name(mut self, key_name: impl Into<String>) -> Self {
        self.key_name = Some(key_name.into());
        self
    }

    pub fn security_groups(&self) -> Option<&[String]> {
        self.security_groups.as_deref()
    }

    pub fn set_security_groups(&mut self, security_groups: Option<Vec<String>>) {
        self.security_groups = security_groups;
    }

    pub fn with_security_groups<I>(mut self, security_groups: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.security_groups
            .get_or_insert_with(Vec::new)
            .extend(security_groups.into_iter().map(Into::into));
        self
    }

    pub fn classic_link_vpc_id(&self) -> Option<&str> {
        self.classic_link_vpc_id.as_deref()
    }

    pub fn set_classic_link_vpc_id(&mut self, classic_link_vpc_id: Option<String>) {
        self.classic_link_vpc_id = classic_link_vpc_id;
    }

    pub fn with_classic_link_vpc_id(mut self, classic_link_vpc_id: impl Into<String>) -> Self {
        self.classic_link_vpc_id = Some(classic_link_vpc_id.into());
        self
    }

    pub fn classic_link_vpc_security_groups(&self) -> Option<&[String]> {
        self.classic_link_vpc_security_groups.as_deref()
    }

    pub fn set_classic_link_vpc_security_groups(
        &mut self,
        classic_link_vpc_security_groups: Option<Vec<String>>,
    ) {
        self.classic_link_vpc_security_groups = classic_link_vpc_security_groups;
    }

    pub fn with_classic_link_vpc_security_groups<I>(mut self, classic_link_vpc_security_groups: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.classic_link_vpc_security_groups
            .get_or_insert_with(Vec::new)
            .extend(classic_link_vpc_security_groups.into_iter().map(Into::into));
        self
    }

    /// Base64-encoded, up to 21847 characters.
    pub fn user_data(&self) -> Option<&str> {
        self.user_data.as_deref()
    }

    pub fn set_user_data(&mut self, user_data: Option<String>) {
        self.user_data = user_data;
    }

    pub fn with_user_data(mut self, user_data: impl Into<String>) -> Self {
        self.user_data = Some(user_data.into());
        self
    }

    pub fn instance_id(&self) -> Option<&str> {
        self.instance_id.as_deref()
    }

    pub fn set_instance_id(&mut self, instance_id: Option<String>) {
        self.instance_id = instance_id;
    }

    pub fn with_instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = Some(instance_id.into());
        self
    }

    pub fn instance_type(&self) -> Option<&str> {
        self.instance_type.as_deref()
    }

    pub fn set_instance_type(&mut self, instance_type: Option<String>) {
        self.instance_type = instance_type;
    }

    pub fn with_instance_type(mut self, instance_type: impl Into<String>) -> Self {
        self.instance_type = Some(instance_type.into());
        self
    }

    pub fn kernel_id(&self) -> Option<&str> {
        self.kernel_id.as_deref()
    }

    pub fn set_kernel_id(&mut self, kernel_id: Option<String>) {
        self.kernel_id = kernel_id;
    }

    pub fn with_kernel_id(mut self, kernel_id: impl Into<String>) -> Self {
        self.kernel_id = Some(kernel_id.into());
        self
    }

    pub fn ramdisk_id(&self) -> Option<&str> {
        self.ramdisk_id.as_deref()
    }

    pub fn set_ramdisk_id(&mut self, ramdisk_id: Option<String>) {
        self.ramdisk_id = ramdisk_id;
    }

    pub fn with_ramdisk_id(mut self, ramdisk_id: impl Into<String>) -> Self {
        self.ramdisk_id = Some(ramdisk_id.into());
        self
    }

    pub fn block_device_mappings(&self) -> Option<&[BlockDeviceMapping]> {
        self.block_device_mappings.as_deref()
    }

    pub fn set_block_device_mappings(
        &mut self,
        block_device_mappings: Option<Vec<BlockDeviceMapping>>,
    ) {
        self.block_device_mappings = block_device_mappings;
    }

    pub fn with_block_device_mappings<I>(mut self, block_device_mappings: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<BlockDeviceMapping>,
    {
        self.block_device_mappings
            .get_or_insert_with(Vec::new)
            .extend(block_device_mappings.into_iter().map(Into::into));
        self
    }

    pub fn instance_monitoring(&self) -> Option<&InstanceMonitoring> {
        self.instance_monitoring.as_ref()
    }

    pub fn set_instance_monitoring(&mut self, instance_monitoring: Option<InstanceMonitoring>) {
        self.instance_monitoring = instance_monitoring;
    }

    pub fn with_instance_monitoring(mut self, instance_monitoring: InstanceMonitoring) -> Self {
        self.instance_monitoring = Some(instance_monitoring);
        self
    }

    pub fn spot_price(&self) -> Option<&str> {
        self.spot_price.as_deref()
    }

    pub fn set_spot_price(&mut self, spot_price: Option<String>) {
        self.spot_price = spot_price;
    }

    pub fn with_spot_price(mut self, spot_price: impl Into<String>) -> Self {
        self.spot_price = Some(spot_price.into());
        self
    }

    pub fn iam_instance_profile(&self) -> Option<&str> {
        self.iam_instance_profile.as_deref()
    }

    pub fn set_iam_instance_profile(&mut self, iam_instance_profile: Option<String>) {
        self.iam_instance_profile = iam_instance_profile;
    }

    pub fn with_iam_instance_profile(mut self, iam_instance_profile: impl Into<String>) -> Self {
        self.iam_instance_profile = Some(iam_instance_profile.into());
        self
    }

    pub fn ebs_optimized(&self) -> Option<bool> {
        self.ebs_optimized
    }

    pub fn set_ebs_optimized(&mut self, ebs_optimized: Option<bool>) {
        self.ebs_optimized = ebs_optimized;
    }

    pub fn with_ebs_optimized(mut self, ebs_optimized: bool) -> Self {
        self.ebs_optimized = Some(ebs_optimized);
        self
    }

    pub fn associate_public_ip_address(&self) -> Option<bool> {
        self.associate_public_ip_address
    }

    pub fn set_associate_public_ip_address(&mut self, associate_public_ip_address: Option<bool>) {
        self.associate_public_ip_address = associate_public_ip_address;
    }

    pub fn with_associate_public_ip_address(mut self, associate_public_ip_address: bool) -> Self {
        self.associate_public_ip_address = Some(associate_public_ip_address);
        self
    }

    pub fn placement_tenancy(&self) -> Option<&str> {
        self.placement_tenancy.as_deref()
    }

    pub fn set_placement_tenancy(&mut self, placement_tenancy: Option<String>) {
        self.placement_tenancy = placement_tenancy;
    }

    pub fn with_placement_tenancy(mut self, placement_tenancy: impl Into<String>) -> Self {
        self.placement_tenancy = Some(placement_tenancy.into());
        self
    }
}

impl fmt::Display for CreateLaunchConfigurationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("LaunchConfigurationName", &self.launch_configuration_name)
            .field("ImageId", &self.image_id)
            .field("KeyName", &self.key_name)
            .list("SecurityGroups", &self.security_groups)
            .field("ClassicLinkVPCId", &self.classic_link_vpc_id)
            .list("ClassicLinkVPCSecurityGroups", &self.classic_link_vpc_security_groups)
            .field("UserData", &self.user_data)
            .field("InstanceId", &self.instance_id)
            .field("InstanceType", &self.instance_type)
            .field("KernelId", &self.kernel_id)
            .field("RamdiskId", &self.ramdisk_id)
            .list("BlockDeviceMappings", &self.block_device_mappings)
            .field("InstanceMonitoring", &self.instance_monitoring)
            .field("SpotPrice", &self.spot_price)
            .field("IamInstanceProfile", &self.iam_instance_profile)
            .field("EbsOptimized", &self.ebs_optimized)
            .field("AssociatePublicIpAddress", &self.associate_public_ip_address)
            .field("PlacementTenancy", &self.placement_tenancy)
            .finish()
    }
}

impl HashCode for CreateLaunchConfigurationRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.launch_configuration_name.hash_code(),
            self.image_id.hash_code(),
            self.key_name.hash_code(),
            self.security_groups.hash_code(),
            self.classic_link_vpc_id.hash_code(),
            self.classic_link_vpc_security_groups.hash_code(),
            self.user_data.hash_code(),
            self.instance_id.hash_code(),
            self.instance_type.hash_code(),
            self.kernel_id.hash_code(),
            self.ramdisk_id.hash_code(),
            self.block_device_mappings.hash_code(),
            self.instance_monitoring.hash_code(),
            self.spot_price.hash_code(),
            self.iam_instance_profile.hash_code(),
            self.ebs_optimized.hash_code(),
            self.associate_public_ip_address.hash_code(),
            self.placement_tenancy.hash_code(),
        ])
    }
}

impl ToQuery for CreateLaunchConfigurationRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "LaunchConfigurationName", &self.launch_configuration_name);
        writer.field(key, "ImageId", &self.image_id);
        writer.field(key, "KeyName", &self.key_name);
        writer.list(key, "SecurityGroups", &self.security_groups);
        writer.field(key, "ClassicLinkVPCId", &self.classic_link_vpc_id);
        writer.list(key, "ClassicLinkVPCSecurityGroups", &self.classic_link_vpc_security_groups);
        writer.field(key, "UserData", &self.user_data);
        writer.field(key, "InstanceId", &self.instance_id);
        writer.field(key, "InstanceType", &self.instance_type);
        writer.field(key, "KernelId", &self.kernel_id);
        writer.field(key, "RamdiskId", &self.ramdisk_id);
        writer.list(key, "BlockDeviceMappings", &self.block_device_mappings);
        writer.field(key, "InstanceMonitoring", &self.instance_monitoring);
        writer.field(key, "SpotPrice", &self.spot_price);
        writer.field(key, "IamInstanceProfile", &self.iam_instance_profile);
        writer.field(key, "EbsOptimized", &self.ebs_optimized);
        writer.field(key, "AssociatePublicIpAddress", &self.associate_public_ip_address);
        writer.field(key, "PlacementTenancy", &self.placement_tenancy);
    }
}

/// Input of `DeleteLaunchConfiguration`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteLaunchConfigurationRequest {
    #[serde(rename = "LaunchConfigurationName", skip_serializing_if = "Option::is_none")]
    launch_configuration_name: Option<String>,
}

impl DeleteLaunchConfigurationRequest {
    pub fn launch_configuration_name(&self) -> Option<&str> {
        self.launch_configuration_name.as_deref()
    }

    pub fn set_launch_configuration_name(&mut self, launch_configuration_name: Option<String>) {
        self.launch_configuration_name = launch_configuration_name;
    }

    pub fn with_launch_configuration_name(
        mut self,
        launch_configuration_name: impl Into<String>,
    ) -> Self {
        self.launch_configuration_name = Some(launch_configuration_name.into());
        self
    }
}

impl fmt::Display for DeleteLaunchConfigurationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("LaunchConfigurationName", &self.launch_configuration_name)
            .finish()
    }
}

impl HashCode for DeleteLaunchConfigurationRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.launch_configuration_name.hash_code(),
        ])
    }
}

impl ToQuery for DeleteLaunchConfigurationRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "LaunchConfigurationName", &self.launch_configuration_name);
    }
}

/// Input of `DescribeLaunchConfigurations`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeLaunchConfigurationsRequest {
    #[serde(rename = "LaunchConfigurationNames", skip_serializing_if = "Option::is_none")]
    launch_configuration_names: Option<Vec<String>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(rename = "MaxRecords", skip_serializing_if = "Option::is_none")]
    max_records: Option<i32>,
}

impl Default for DescribeLaunchConfigurationsRequest {
    fn default() -> Self {
        DescribeLaunchConfigurationsRequest {
            launch_configuration_names: Some(Vec::new()),
            next_token: None,
            max_records: None,
        }
    }
}

impl DescribeLaunchConfigurationsRequest {
    pub fn launch_configuration_names(&self) -> Option<&[String]> {
        self.launch_configuration_names.as_deref()
    }

    pub fn set_launch_configuration_names(
        &mut self,
        launch_configuration_names: Option<Vec<String>>,
    ) {
        self.launch_configuration_names = launch_configuration_names;
    }

    pub fn with_launch_configuration_names<I>(mut self, launch_configuration_names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.launch_configuration_names
            .get_or_insert_with(Vec::new)
            .extend(launch_configuration_names.into_iter().map(Into::into));
        self
    }

    /// Token of the page to return, taken from the previous result.
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    pub fn set_next_token(&mut self, next_token: Option<String>) {
        self.next_token = next_token;
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }

    /// Page size. Defaults to 50, at most 100.
    pub fn max_records(&self) -> Option<i32> {
        self.max_records
    }

    pub fn set_max_records(&mut self, max_records: Option<i32>) {
        self.max_records = max_records;
    }

    pub fn with_max_records(mut self, max_records: i32) -> Self {
        self.max_records = Some(max_records);
        self
    }
}

impl fmt::Display for DescribeLaunchConfigurationsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("LaunchConfigurationNames", &self.launch_configuration_names)
            .field("NextToken", &self.next_token)
            .field("MaxRecords", &self.max_records)
            .finish()
    }
}

impl HashCode for DescribeLaunchConfigurationsRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.launch_configuration_names.hash_code(),
            self.next_token.hash_code(),
            self.max_records.hash_code(),
        ])
    }
}

impl ToQuery for DescribeLaunchConfigurationsRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.list(key, "LaunchConfigurationNames", &self.launch_configuration_names);
        writer.field(key, "NextToken", &self.next_token);
        writer.field(key, "MaxRecords", &self.max_records);
    }
}

/// Output of `DescribeLaunchConfigurations`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeLaunchConfigurationsResult {
    #[serde(rename = "LaunchConfigurations", skip_serializing_if = "Option::is_none")]
    launch_configurations: Option<Vec<LaunchConfiguration>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl Default for DescribeLaunchConfigurationsResult {
    fn default() -> Self {
        DescribeLaunchConfigurationsResult {
            launch_configurations: Some(Vec::new()),
            next_token: None,
        }
    }
}

impl DescribeLaunchConfigurationsResult {
    pub fn launch_configurations(&self) -> Option<&[LaunchConfiguration]> {
        self.launch_configurations.as_deref()
    }

    pub fn set_launch_configurations(
        &mut self,
        launch_configurations: Option<Vec<LaunchConfiguration>>,
    ) {
        self.launch_configurations = launch_configurations;
    }

    pub fn with_launch_configurations<I>(mut self, launch_configurations: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<LaunchConfiguration>,
    {
        self.launch_configurations
            .get_or_insert_with(Vec::new)
            .extend(launch_configurations.into_iter().map(Into::into));
        self
    }

    /// Present when there are more pages.
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    pub fn set_next_token(&mut self, next_token: Option<String>) {
        self.next_token = next_token;
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

impl fmt::Display for DescribeLaunchConfigurationsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("LaunchConfigurations", &self.launch_configurations)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

impl HashCode for DescribeLaunchConfigurationsResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.launch_configurations.hash_code(),
            self.next_token.hash_code(),
        ])
    }
}

impl FromXml for DescribeLaunchConfigurationsResult {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = DescribeLaunchConfigurationsResult::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "LaunchConfigurations" => out.launch_configurations = Some(xml::list(child)?),
                "NextToken" => out.next_token = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}
