//! 伪造的 `/proc` 目录树
//!
//! 在临时目录中按真实布局创建文件、目录和符号链接，目录随 [`FakeProc`] 一起删除。

use std::fs;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::samples;

/// init 进程号
pub const INIT_PID: u32 = 1;
/// 登录 shell 进程号
pub const SHELL_PID: u32 = 42;
/// “自身”进程号（`self` 链接指向它）
pub const SELF_PID: u32 = 4242;
/// 普通用户 uid
pub const USER_UID: u32 = 1000;

/// 一个伪造进程的描述
#[derive(Debug, Clone)]
pub struct FakeProcess {
    pub pid: u32,
    pub ppid: u32,
    pub uid: u32,
    pub name: String,
    pub args: Vec<String>,
}

impl FakeProcess {
    pub fn new(pid: u32, name: &str) -> Self {
        Self {
            pid,
            ppid: 0,
            uid: 0,
            name: name.to_string(),
            args: vec![name.to_string()],
        }
    }

    pub fn ppid(mut self, ppid: u32) -> Self {
        self.ppid = ppid;
        self
    }

    pub fn uid(mut self, uid: u32) -> Self {
        self.uid = uid;
        self
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.args = args.iter().map(|a| a.to_string()).collect();
        self
    }
}

/// 伪造的 `/proc` 挂载点
pub struct FakeProc {
    _dir: TempDir,
    root: PathBuf,
}

impl Default for FakeProc {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeProc {
    /// 创建空的挂载点
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = dir.path().join("proc");
        fs::create_dir(&root).expect("create mount point");
        Self { _dir: dir, root }
    }

    /// 包含系统文件和三个进程（init、shell、自身）的标准目录树
    pub fn standard() -> Self {
        let proc = Self::new();
        proc.system();
        proc.process(
            &FakeProcess::new(INIT_PID, "systemd").args(&["/lib/systemd/systemd", "--system"]),
        );
        proc.process(
            &FakeProcess::new(SHELL_PID, "bash")
                .ppid(INIT_PID)
                .uid(USER_UID)
                .args(&["-bash"]),
        );
        proc.process(
            &FakeProcess::new(SELF_PID, "procq")
                .ppid(SHELL_PID)
                .uid(USER_UID)
                .args(&["procq", "1/status"]),
        );
        proc
    }

    /// 挂载点路径
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 写入文件（自动创建父目录）
    pub fn file(&self, rel: &str, content: &str) -> &Self {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, content).expect("write fake file");
        self
    }

    /// 创建目录
    pub fn dir(&self, rel: &str) -> &Self {
        fs::create_dir_all(self.root.join(rel)).expect("create fake dir");
        self
    }

    /// 创建符号链接
    pub fn symlink(&self, rel: &str, target: &str) -> &Self {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        symlink(target, &path).expect("create fake symlink");
        self
    }

    /// 删除文件或目录（模拟进程退出）
    pub fn remove(&self, rel: &str) -> &Self {
        let path = self.root.join(rel);
        if path.is_dir() {
            fs::remove_dir_all(&path).expect("remove fake dir");
        } else {
            fs::remove_file(&path).expect("remove fake file");
        }
        self
    }

    /// 写入系统级文件与链接
    pub fn system(&self) -> &Self {
        self.file("cpuinfo", samples::CPUINFO)
            .file("uptime", samples::UPTIME)
            .file("loadavg", samples::LOADAVG)
            .file("stat", samples::STAT)
            .file("partitions", samples::PARTITIONS)
            .file("softirqs", samples::SOFTIRQS)
            .file("interrupts", samples::INTERRUPTS)
            .file("meminfo", samples::MEMINFO)
            .file("diskstats", samples::DISKSTATS)
            .file("vmstat", samples::VMSTAT)
            .file("slabinfo", samples::SLABINFO)
            .file("version", samples::VERSION)
            .file("fs/nfsd/pool_stats", samples::POOL_STATS)
            .dir("sys/kernel")
            .file("sys/kernel/hostname", "fakehost\n")
            .symlink("self", &SELF_PID.to_string())
            .symlink("mounts", "self/mounts")
            .symlink("net", "self/net")
            .symlink("sys/kernel/escape", "/etc/hostname")
    }

    /// 写入一个进程目录
    pub fn process(&self, process: &FakeProcess) -> &Self {
        let pid = process.pid;
        let at = |leaf: &str| format!("{pid}/{leaf}");
        let args: Vec<&str> = process.args.iter().map(String::as_str).collect();

        self.file(
            &at("status"),
            &samples::status(&process.name, pid, process.ppid, process.uid),
        )
        .file(&at("stat"), &samples::process_stat(pid, &process.name, process.ppid))
        .file(&at("statm"), samples::STATM)
        .file(&at("cmdline"), &samples::cmdline(&args))
        .file(&at("environ"), samples::ENVIRON)
        .file(&at("io"), samples::IO)
        .file(&at("mounts"), samples::MOUNTS)
        .file(&at("smaps"), samples::SMAPS)
        .file(&at("net/dev"), samples::NET_DEV)
        .file(&at("net/dev_mcast"), samples::NET_DEV_MCAST)
        .file(&at("net/route"), samples::NET_ROUTE)
        .file(&at("net/snmp"), samples::NET_SNMP)
        .file(&at("net/netstat"), samples::NET_NETSTAT)
        .file(&at("net/sockstat"), samples::NET_SOCKSTAT)
        .file(&at("net/tcp"), samples::NET_TCP)
        .file(&at("net/udp"), samples::NET_UDP)
        .file(&at("net/rpc/nfsd"), samples::NET_RPC_NFSD)
        .file(&at("net/rpc/nfs"), samples::NET_RPC_NFS)
        .symlink(&at("exe"), &format!("/usr/bin/{}", process.name))
        .symlink(&at("cwd"), "/")
        .symlink(&at("fd/0"), "/dev/null")
        .symlink(&at("ns/net"), "net:[4026531992]")
    }
}
