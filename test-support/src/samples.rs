//! 伪文件的样例内容
//!
//! 取自真实主机并做了删减，字段顺序与内核输出一致。

/// `/proc/cpuinfo`（两个 CPU）
pub const CPUINFO: &str = "processor\t: 0
vendor_id\t: GenuineIntel
cpu family\t: 6
model\t\t: 142
model name\t: Intel(R) Core(TM) i7-8550U CPU @ 1.80GHz
stepping\t: 10
cpu MHz\t\t: 1992.000
cache size\t: 8192 KB
physical id\t: 0
siblings\t: 2
core id\t\t: 0
cpu cores\t: 2
apicid\t\t: 0
initial apicid\t: 0
fpu\t\t: yes
fpu_exception\t: yes
cpuid level\t: 22
wp\t\t: yes
flags\t\t: fpu vme de pse tsc
bogomips\t: 3984.00
clflush size\t: 64
cache_alignment\t: 64
address sizes\t: 39 bits physical, 48 bits virtual
power management:

processor\t: 1
vendor_id\t: GenuineIntel
cpu family\t: 6
model\t\t: 142
model name\t: Intel(R) Core(TM) i7-8550U CPU @ 1.80GHz
stepping\t: 10
cpu MHz\t\t: 2001.000
cache size\t: 8192 KB
physical id\t: 0
siblings\t: 2
core id\t\t: 1
cpu cores\t: 2
apicid\t\t: 1
initial apicid\t: 1
fpu\t\t: yes
fpu_exception\t: yes
cpuid level\t: 22
wp\t\t: no
flags\t\t: fpu vme de pse tsc
bogomips\t: 3984.00
clflush size\t: 64
cache_alignment\t: 64
address sizes\t: 39 bits physical, 48 bits virtual
power management:

";

/// `/proc/uptime`
pub const UPTIME: &str = "350735.47 234388.90\n";

/// `/proc/loadavg`
pub const LOADAVG: &str = "0.20 0.18 0.12 1/80 11206\n";

/// `/proc/stat`
pub const STAT: &str = "cpu  2255 34 2290 22625563 6290 127 456 0 0 0
cpu0 1132 34 1441 11311718 3675 127 438 0 0 0
cpu1 1123 0 849 11313845 2614 0 18 0 0 0
intr 1462898 1462875 2 0 21
ctxt 1990473
btime 1062191376
processes 2915
procs_running 1
procs_blocked 0
softirq 183433 0 21755 12 39
";

/// `/proc/partitions`
pub const PARTITIONS: &str = "major minor  #blocks  name

   8        0  488386584 sda
   8        1     524288 sda1
   8        2  487860224 sda2
";

/// `/proc/softirqs`
pub const SOFTIRQS: &str = "                    CPU0       CPU1
          HI:          0          1
       TIMER:     123456     654321
      NET_RX:         17          3
";

/// `/proc/interrupts`
pub const INTERRUPTS: &str = "           CPU0       CPU1
  0:         44          0   IO-APIC   2-edge      timer
  1:          9          0   IO-APIC   1-edge      i8042
NMI:          0          0   Non-maskable interrupts
ERR:          0
MIS:          0
";

/// `/proc/meminfo`
pub const MEMINFO: &str = "MemTotal:       16314480 kB
MemFree:         9174300 kB
MemAvailable:   12367500 kB
Buffers:          402712 kB
Cached:          2862604 kB
HugePages_Total:       0
";

/// `/proc/diskstats`
pub const DISKSTATS: &str = "   8       0 sda 108250 34203 5918314 43561 107196 145780 11102440 231066 0 89888 274628
   8       1 sda1 305 0 4402 96 2 0 2 0 0 84 96
";

/// `/proc/vmstat`
pub const VMSTAT: &str = "nr_free_pages 2293575
nr_inactive_anon 13431
pgfault 123456789
";

/// `/proc/slabinfo`
pub const SLABINFO: &str = "slabinfo - version: 2.1
# name            <active_objs> <num_objs> <objsize> <objperslab> <pagesperslab> : tunables <limit> <batchcount> <sharedfactor> : slabdata <active_slabs> <num_slabs> <sharedavail>
kmalloc-64          2560   2560     64   64    1 : tunables    0    0    0 : slabdata     40     40      0
dentry             40488  41139    192   21    1 : tunables    0    0    0 : slabdata   1959   1959      0
";

/// `/proc/fs/nfsd/pool_stats`
pub const POOL_STATS: &str = "# pool packets-arrived sockets-enqueued threads-woken threads-timedout
0 1024 12 1012 0
";

/// `/proc/version`（没有解码器）
pub const VERSION: &str = "Linux version 6.1.0 (gcc version 12.2.0) #1 SMP PREEMPT_DYNAMIC\n";

/// `/proc/<pid>/status`
pub fn status(name: &str, pid: u32, ppid: u32, uid: u32) -> String {
    format!(
        "Name:\t{name}
Umask:\t0022
State:\tS (sleeping)
Tgid:\t{pid}
Ngid:\t0
Pid:\t{pid}
PPid:\t{ppid}
TracerPid:\t0
Uid:\t{uid}\t{uid}\t{uid}\t{uid}
Gid:\t{uid}\t{uid}\t{uid}\t{uid}
FDSize:\t64
Groups:\t4 24 27
VmPeak:\t  169348 kB
VmSize:\t  169348 kB
VmRSS:\t   13060 kB
RssAnon:\t    3452 kB
Threads:\t1
SigQ:\t0/62811
voluntary_ctxt_switches:\t4006
nonvoluntary_ctxt_switches:\t1135
"
    )
}

/// `/proc/<pid>/stat`
pub fn process_stat(pid: u32, comm: &str, ppid: u32) -> String {
    format!(
        "{pid} ({comm}) S {ppid} 1 1 0 -1 4194560 51003 5345307 91 2112 188 1049 23655 4744 20 0 1 0 4 \
         172376064 3265 18446744073709551615 1 1 0 0 0 0 671173123 4096 1260 0 0 0 17 0 0 0 91 0 0\n"
    )
}

/// `/proc/<pid>/statm`
pub const STATM: &str = "42209 3265 2013 245 0 2392 0\n";

/// `/proc/<pid>/cmdline`
pub fn cmdline(args: &[&str]) -> String {
    let mut out = String::new();
    for arg in args {
        out.push_str(arg);
        out.push('\0');
    }
    out
}

/// `/proc/<pid>/environ`
pub const ENVIRON: &str = "HOME=/root\0PATH=/usr/bin:/bin\0TERM=linux\0EMPTY=\0";

/// `/proc/<pid>/io`
pub const IO: &str = "rchar: 323934931
wchar: 323929600
syscr: 632687
syscw: 632675
read_bytes: 0
write_bytes: 323932160
cancelled_write_bytes: 0
";

/// `/proc/<pid>/mounts`
pub const MOUNTS: &str = "sysfs /sys sysfs rw,nosuid,nodev,noexec,relatime 0 0
proc /proc proc rw,nosuid,nodev,noexec,relatime 0 0
/dev/sda1 / ext4 rw,relatime,errors=remount-ro 0 1
";

/// `/proc/<pid>/smaps`
pub const SMAPS: &str = "00400000-0040b000 r-xp 00000000 fd:01 1048602                            /usr/bin/cat
Size:                 44 kB
Rss:                  44 kB
VmFlags: rd ex mr mw me dw
01b8a000-01bab000 rw-p 00000000 00:00 0                                  [heap]
Size:                132 kB
Rss:                   8 kB
Pss:                   8 kB
THPeligible:    0
VmFlags: rd wr mr mw me ac
7ffd5c7f1000-7ffd5c812000 rw-p 00000000 00:00 0                          [stack]
Size:                132 kB
Rss:                  12 kB
7ffd5c9e5000-7ffd5c9e7000 r-xp 00000000 00:00 0                          [vdso]
Size:                  8 kB
ffffffffff600000-ffffffffff601000 r-xp 00000000 00:00 0                  [vsyscall]
Size:                  4 kB
";

/// `/proc/<pid>/net/dev`
pub const NET_DEV: &str = "Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
    lo:    1296      16    0    0    0     0          0         0     1296      16    0    0    0     0       0          0
  eth0: 5862410    7339    0    0    0     0          0         0   725402    5433    0    0    0     0       0          0
";

/// `/proc/<pid>/net/dev_mcast`
pub const NET_DEV_MCAST: &str = "2    eth0            1     0     333300000001
2    eth0            1     0     01005e000001
3    wlan0           1     0     01005e0000fb
";

/// `/proc/<pid>/net/route`
pub const NET_ROUTE: &str = "Iface\tDestination\tGateway \tFlags\tRefCnt\tUse\tMetric\tMask\t\tMTU\tWindow\tIRTT
eth0\t00000000\t0101A8C0\t0003\t0\t0\t100\t00000000\t0\t0\t0
wlan0\t00000000\t0102A8C0\t0003\t0\t0\t600\t00000000\t0\t0\t0
eth0\t0001A8C0\t00000000\t0001\t0\t0\t100\t00FFFFFF\t0\t0\t0
";

/// `/proc/<pid>/net/snmp`
pub const NET_SNMP: &str = "Ip: Forwarding DefaultTTL InReceives
Ip: 1 64 123456
Tcp: RtoAlgorithm RtoMin RtoMax MaxConn
Tcp: 1 200 120000 -1
";

/// `/proc/<pid>/net/netstat`
pub const NET_NETSTAT: &str = "TcpExt: SyncookiesSent SyncookiesRecv
TcpExt: 0 3
IpExt: InNoRoutes InTruncatedPkts
IpExt: 0 0
";

/// `/proc/<pid>/net/sockstat`
pub const NET_SOCKSTAT: &str = "sockets: used 290
TCP: inuse 5 orphan 0 tw 0 alloc 7 mem 1
UDP: inuse 3 mem 2
";

/// `/proc/<pid>/net/tcp`
pub const NET_TCP: &str = "  sl  local_address rem_address   st tx_queue rx_queue tr tm->when retrnsmt   uid  timeout inode
   0: 0100007F:0035 00000000:0000 0A 00000000:00000000 00:00000000 00000000   101        0 19203 1 0000000000000000 100 0 0 10 0
   1: 0F02000A:A2C4 8D0DD9AC:01BB 01 00000000:00000000 02:00000A1B 00000000  1000        0 45678 2 0000000000000000 20 4 30 10 -1
";

/// `/proc/<pid>/net/udp`
pub const NET_UDP: &str = "   sl  local_address rem_address   st tx_queue rx_queue tr tm->when retrnsmt   uid  timeout inode ref pointer drops
  283: 3500007F:0035 00000000:0000 07 00000000:00000000 00:00000000 00000000   101        0 19202 2 0000000000000000 0
";

/// `/proc/<pid>/net/rpc/nfsd`
pub const NET_RPC_NFSD: &str = "rc 0 6 1212
fh 0 0 0 0 0
io 4096 8192
th 8 0 0.000 0.000 0.000 0.000 0.000 0.000 0.000 0.000 0.000 0.000
ra 32 1 2 3 4 5 6 7 8 9 10 11
net 1218 0 1218 6
rpc 1218 0 0 0 0
proc2 18 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
proc3 22 6 1 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
proc4 2 2 1210
";

/// `/proc/<pid>/net/rpc/nfs`
pub const NET_RPC_NFS: &str = "net 0 0 0 0
rpc 1234 0 1234
proc3 22 0 12 0 3 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
";
